// vlib-cli/tests/copy_command_tests.rs
//
// Drives the library.cp command against the in-memory service, from parsed
// command-line arguments to the line written on stdout.

use clap::Parser;
use vlib_cli::{Cli, Commands, CopyArgs, run_copy};
use vlib_core::error::CoreError;
use vlib_core::model::{Item, Library};
use vlib_core::service::InMemoryLibraryService;
use vlib_core::OperationContext;

fn namespace() -> InMemoryLibraryService {
    InMemoryLibraryService::new()
        .with_library(Library::new("lib-a", "content-A"))
        .with_library(Library::new("lib-b", "content-B"))
        .with_item(Item::new("item-1", "lib-a", "item-X"))
}

fn parse_copy(args: &[&str]) -> CopyArgs {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    match cli.command {
        Commands::LibraryCp(args) => args,
    }
}

#[test]
fn test_copy_prints_only_new_id() -> Result<(), Box<dyn std::error::Error>> {
    let service = namespace();
    let args = parse_copy(&["vlib", "library.cp", "/content-A/item-X", "/content-B"]);
    let mut out = Vec::new();

    let new_id = run_copy(&OperationContext::new(), &service, &args, &mut out)?;

    assert_eq!(String::from_utf8(out)?, format!("{}\n", new_id));
    let copies = service.copies();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].spec.name.as_deref(), Some("item-X"));
    assert_eq!(copies[0].spec.library_id.as_deref(), Some("lib-b"));
    Ok(())
}

#[test]
fn test_copy_name_flag_overrides_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = namespace();
    let args = parse_copy(&["vlib", "cp", "-n", "item-Y", "/content-A/item-X", "/content-B"]);
    let mut out = Vec::new();

    run_copy(&OperationContext::new(), &service, &args, &mut out)?;

    assert_eq!(service.copies()[0].spec.name.as_deref(), Some("item-Y"));
    Ok(())
}

#[test]
fn test_ambiguous_source_writes_nothing() {
    let service = namespace().with_item(Item::new("item-2", "lib-a", "item-X"));
    let args = parse_copy(&["vlib", "library.cp", "/content-A/item-X", "/content-B"]);
    let mut out = Vec::new();

    let err = run_copy(&OperationContext::new(), &service, &args, &mut out).unwrap_err();

    assert!(matches!(err, CoreError::AmbiguousMatch { count: 2, .. }));
    assert!(out.is_empty());
    assert!(service.copies().is_empty());
}

#[test]
fn test_destination_item_is_wrong_kind() {
    let service = namespace();
    let args = parse_copy(&["vlib", "library.cp", "/content-A/item-X", "/content-A/item-X"]);
    let mut out = Vec::new();

    let err = run_copy(&OperationContext::new(), &service, &args, &mut out).unwrap_err();

    assert!(matches!(err, CoreError::WrongKind { .. }));
    assert!(out.is_empty());
    assert!(service.copies().is_empty());
}

#[test]
fn test_global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from([
        "vlib", "library.cp", "/content-A/item-X", "/content-B",
        "--url", "https://vc.example.com", "--insecure", "-v",
    ])
    .expect("arguments should parse");
    assert_eq!(cli.client.url.as_deref(), Some("https://vc.example.com"));
    assert!(cli.client.insecure);
    assert!(cli.verbose);
}
