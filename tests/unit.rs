use projdump::{Classifier, MAX_FILE_SIZE_BYTES, RuleSet, Stat};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn classifier() -> Classifier {
    Classifier::new("/proj", Arc::new(RuleSet::default()), "project_dump.txt")
}

fn small() -> Stat {
    Stat::File { size: 100 }
}

fn large() -> Stat {
    Stat::File {
        size: MAX_FILE_SIZE_BYTES + 1,
    }
}

fn ignored(path: &str, stat: Stat) -> bool {
    classifier().classify_with(Path::new(path), &stat).ignored
}

fn schema_like(path: &str, stat: Stat) -> bool {
    classifier().classify_with(Path::new(path), &stat).schema_like
}

#[test]
fn test_default_rules() {
    let rules = RuleSet::default();
    assert_eq!(rules.max_file_size, 2 * 1024 * 1024);
    assert!(rules.ignored_dirs.contains("node_modules"));
    assert!(rules.ignored_extensions.contains("png"));
    assert!(rules.schema_hint_names.contains("ddl.sql"));
    assert!(!rules.schema_hint_names.contains("DDL.sql"));
}

#[test]
fn test_ignored_filenames_always_win() {
    assert!(ignored("/proj/yarn.lock", small()));
    assert!(ignored("/proj/.env", small()));
    assert!(ignored("/proj/prisma/package-lock.json", small()));
    assert!(ignored("/proj/migrations/.DS_Store", Stat::Missing));
}

#[test]
fn test_output_file_is_ignored() {
    assert!(ignored("/proj/project_dump.txt", small()));
    let custom = Classifier::new("/proj", Arc::new(RuleSet::default()), "snapshot.md");
    assert!(custom.classify_with(Path::new("/proj/snapshot.md"), &small()).ignored);
    assert!(!custom.classify_with(Path::new("/proj/README.md"), &small()).ignored);
}

#[test]
fn test_ignored_dir_segments() {
    assert!(ignored("/proj/node_modules/pkg/index.js", small()));
    assert!(ignored("/proj/src/build", Stat::Dir));
    assert!(ignored("/proj/a/.git/config.toml", small()));
    // Exact and case-sensitive.
    assert!(!ignored("/proj/Build/main.rs", small()));
    assert!(!ignored("/proj/builder/main.rs", small()));
}

#[test]
fn test_segments_above_root_are_not_considered() {
    let nested = Classifier::new(
        "/tmp/build/proj",
        Arc::new(RuleSet::default()),
        "project_dump.txt",
    );
    let verdict = nested.classify_with(Path::new("/tmp/build/proj/src/app.py"), &small());
    assert!(!verdict.ignored);
    assert!(!verdict.schema_like);

    let under_db = Classifier::new("/srv/db/app", Arc::new(RuleSet::default()), "out.txt");
    assert!(!under_db.is_schema_like(Path::new("/srv/db/app/src/app.py")));
}

#[test]
fn test_sql_and_prisma_are_schema_and_kept() {
    for path in ["/proj/src/setup.sql", "/proj/weird/place/app.prisma", "/proj/X.SQL"] {
        assert!(schema_like(path, small()), "{path} should be schema-like");
        assert!(!ignored(path, small()), "{path} should be kept");
    }
}

#[test]
fn test_large_file_rule_precedes_schema_exemption() {
    assert!(ignored("/proj/migrations/001_init.sql", large()));
    assert!(ignored("/proj/src/app.py", large()));
    assert!(schema_like("/proj/migrations/001_init.sql", large()));
}

#[test]
fn test_size_threshold_is_exclusive() {
    let at_limit = Stat::File {
        size: MAX_FILE_SIZE_BYTES,
    };
    assert!(!ignored("/proj/src/app.py", at_limit));
}

#[test]
fn test_bulk_data_kept_only_when_small_and_schema_like() {
    assert!(ignored("/proj/data.json", small()));
    assert!(ignored("/proj/src/export.CSV", small()));
    assert!(!ignored("/proj/prisma/seed.json", small()));
    assert!(schema_like("/proj/prisma/seed.json", small()));
    assert!(ignored("/proj/prisma/seed.json", large()));
    // A directory named like a data file is pruned too.
    assert!(ignored("/proj/fixtures.json", Stat::Dir));
}

#[test]
fn test_orm_model_heuristic() {
    assert!(schema_like("/proj/models/user.py", small()));
    assert!(!ignored("/proj/models/user.py", small()));
    assert!(schema_like("/proj/src/Entities/User.ts", small()));
    assert!(!schema_like("/proj/models/user.png", small()));
    assert!(ignored("/proj/models/user.png", small()));
    assert!(!schema_like("/proj/models/user.go", small()));
}

#[test]
fn test_schema_hints_override_extension_allowlist() {
    assert!(!ignored("/proj/src/user_migration.txt", small()));
    assert!(!ignored("/proj/Migrations/001.txt", small()));
    assert!(!ignored("/proj/alembic.ini", small()));
    assert!(ignored("/proj/src/notes.txt", small()));
    assert!(ignored("/proj/src/Makefile", small()));
}

#[test]
fn test_schema_dir_match_is_per_segment() {
    assert!(schema_like("/proj/db/queries.go", small()));
    assert!(!schema_like("/proj/dbtools/queries.go", small()));
    assert!(!schema_like("/proj/src/mydb/queries.go", small()));
}

#[test]
fn test_stat_failure_is_not_large() {
    assert!(!ignored("/proj/src/app.py", Stat::Failed));
    assert!(!ignored("/proj/migrations/big.sql", Stat::Missing));
    assert!(ignored("/proj/image.png", Stat::Failed));
    assert!(ignored("/proj/archive.zip", Stat::Dir));
}

#[test]
fn test_classification_is_repeatable() {
    let c = classifier();
    let path = Path::new("/proj/prisma/schema.prisma");
    assert_eq!(c.classify_with(path, &small()), c.classify_with(path, &small()));
    assert_eq!(c.classify(path), c.classify(path));
}

#[test]
fn test_stat_probe() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.py");
    fs::write(&file, "x = 1\n").unwrap();
    assert_eq!(Stat::probe(&file), Stat::File { size: 6 });
    assert_eq!(Stat::probe(dir.path()), Stat::Dir);
    assert_eq!(Stat::probe(&dir.path().join("missing.py")), Stat::Missing);
}

#[test]
fn test_is_ignored_stats_the_real_file() {
    let dir = tempdir().unwrap();
    let c = Classifier::new(dir.path(), Arc::new(RuleSet::default()), "project_dump.txt");
    let big = dir.path().join("big.sql");
    fs::File::create(&big)
        .unwrap()
        .set_len(MAX_FILE_SIZE_BYTES + 1)
        .unwrap();
    let small = dir.path().join("small.sql");
    fs::write(&small, "CREATE TABLE t (id INT);").unwrap();
    assert!(c.is_ignored(&big));
    assert!(!c.is_ignored(&small));
    assert!(!c.is_ignored(&dir.path().join("gone.sql")));
}
