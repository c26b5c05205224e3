use std::path::{Path, PathBuf};

use super::*;
use crate::{diagnostics::ErrorKind, syntax::Statement};

fn defined_tags(statements: &[Statement]) -> Vec<&str> {
    statements
        .iter()
        .filter_map(Statement::defined_tag)
        .collect()
}

#[test]
fn lexical_normalize_folds_dots() {
    assert_eq!(
        lexical_normalize(Path::new("/a/./b/../c.ion")),
        PathBuf::from("/a/c.ion")
    );
    assert_eq!(lexical_normalize(Path::new("/../x")), PathBuf::from("/x"));
    assert_eq!(lexical_normalize(Path::new("../x")), PathBuf::from("../x"));
}

#[test]
fn splices_in_place_and_in_order() {
    let loader = MemoryLoader::new()
        .with_file("/lib/mid.ion", r#"(define b (domain)) (include "leaf.ion") (define c (domain))"#)
        .with_file("/lib/leaf.ion", "(define leaf (domain))");
    let resolver = IncludeResolver::new(&[PathBuf::from("/lib")], &loader);

    let statements = resolver
        .resolve_source(
            "<inline>",
            r#"(define a (domain)) (include "mid.ion") (define d (domain))"#,
        )
        .map_err(|diagnostic| diagnostic.to_string());
    assert_eq!(
        statements.as_deref().map(defined_tags),
        Ok(vec!["a", "b", "leaf", "c", "d"])
    );
}

#[test]
fn including_directory_beats_roots() {
    let loader = MemoryLoader::new()
        .with_file("/project/main.ion", r#"(include "shared.ion")"#)
        .with_file("/project/shared.ion", "(define local (domain))")
        .with_file("/roots/a/shared.ion", "(define from_root (domain))");
    let resolver = IncludeResolver::new(&[PathBuf::from("/roots/a")], &loader);

    let statements = resolver
        .resolve_source("/project/main.ion", r#"(include "shared.ion")"#)
        .map_err(|diagnostic| diagnostic.to_string());
    assert_eq!(statements.as_deref().map(defined_tags), Ok(vec!["local"]));
}

#[test]
fn earlier_roots_win() {
    let loader = MemoryLoader::new()
        .with_file("/d/x.ion", "(define from_d (domain))")
        .with_file("/a/x.ion", "(define from_a (domain))");
    let roots = [PathBuf::from("/d"), PathBuf::from("/a")];
    let resolver = IncludeResolver::new(&roots, &loader);

    let statements = resolver
        .resolve_source("<inline>", r#"(include "x.ion")"#)
        .map_err(|diagnostic| diagnostic.to_string());
    assert_eq!(statements.as_deref().map(defined_tags), Ok(vec!["from_d"]));
}

#[test]
fn missing_include_lists_every_attempt() {
    let loader = MemoryLoader::new().with_file("/src/main.ion", "");
    let roots = [
        PathBuf::from("/r1"),
        PathBuf::from("/r2/../r1"),
        PathBuf::from("/r2"),
    ];
    let resolver = IncludeResolver::new(&roots, &loader);

    let Err(diagnostic) = resolver.resolve_source("/src/main.ion", "\n  (include \"gone.ion\")")
    else {
        panic!("expected a missing include");
    };
    match diagnostic.kind() {
        ErrorKind::IncludeFileNotFound { path, attempted } => {
            assert_eq!(path, "gone.ion");
            assert_eq!(
                attempted,
                &vec![
                    PathBuf::from("/src/gone.ion"),
                    PathBuf::from("/r1/gone.ion"),
                    PathBuf::from("/r2/gone.ion"),
                ]
            );
        }
        other => panic!("unexpected error {:?}", other),
    }
    let location = diagnostic.location().map(|l| (l.file().to_string(), l.line, l.column));
    assert_eq!(location, Some(("/src/main.ion".to_string(), 2, 3)));
}

#[test]
fn circular_include_names_the_cycle() {
    let loader = MemoryLoader::new()
        .with_file("/lib/a.ion", r#"(include "b.ion")"#)
        .with_file("/lib/b.ion", r#"(include "a.ion")"#);
    let resolver = IncludeResolver::new(&[PathBuf::from("/lib")], &loader);

    let Err(diagnostic) = resolver.resolve_source("<inline>", r#"(include "a.ion")"#) else {
        panic!("expected a cycle");
    };
    assert_eq!(
        diagnostic.message(),
        "circular include: /lib/a.ion -> /lib/b.ion -> /lib/a.ion"
    );
    assert_eq!(
        diagnostic.location().map(|l| l.file().to_string()),
        Some("/lib/b.ion".to_string())
    );
}

#[test]
fn a_file_including_itself_is_a_cycle() {
    let loader = MemoryLoader::new().with_file("/lib/self.ion", r#"(include "self.ion")"#);
    let resolver = IncludeResolver::new(&[], &loader);

    let result = resolver.resolve_source("/lib/self.ion", r#"(include "self.ion")"#);
    assert!(matches!(
        result.map_err(|diagnostic| diagnostic.kind().clone()),
        Err(ErrorKind::CircularInclude { cycle }) if cycle.len() == 2
    ));
}

#[test]
fn repeated_inclusion_is_not_deduplicated() {
    let loader = MemoryLoader::new().with_file("/lib/common.ion", "(transform x y)");
    let resolver = IncludeResolver::new(&[PathBuf::from("/lib")], &loader);

    let statements = resolver
        .resolve_source("<inline>", r#"(include "common.ion") (include "common.ion")"#)
        .map_err(|diagnostic| diagnostic.to_string());
    assert_eq!(statements.map(|statements| statements.len()), Ok(2));
}

#[test]
fn syntax_errors_in_included_files_carry_their_path() {
    let loader = MemoryLoader::new().with_file("/lib/broken.ion", "(define x");
    let resolver = IncludeResolver::new(&[PathBuf::from("/lib")], &loader);

    let Err(diagnostic) = resolver.resolve_source("<inline>", r#"(include "broken.ion")"#) else {
        panic!("expected a syntax error");
    };
    assert!(matches!(diagnostic.kind(), ErrorKind::Syntax { .. }));
    assert_eq!(
        diagnostic.location().map(|l| l.file().to_string()),
        Some("/lib/broken.ion".to_string())
    );
}

#[test]
fn roots_are_deduplicated_in_order() {
    let loader = MemoryLoader::new();
    let roots = normalize_roots(
        &[
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/b/."),
        ],
        &loader,
    );
    assert_eq!(roots, vec![PathBuf::from("/b"), PathBuf::from("/a")]);
}
