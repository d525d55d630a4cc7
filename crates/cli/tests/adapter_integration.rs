//! Adapter integration: filtering, manifest loading, file transforms

use std::fs;
use std::path::Path;

use gqlinline::adapter::{load_artifact, transform_module, ModuleFilter};
use gqlinline_core::{ArtifactReference, RewriteOptions};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const MODULE: &str = "const Q = graphql(`query Users { users { id } }`)\n";

#[test]
fn transforms_a_module_against_a_directory_artifact() {
    let dir = TempDir::new().expect("tempdir");
    let module_path = dir.path().join("users.ts");
    fs::write(&module_path, MODULE).expect("write module");

    let artifact = load_artifact("./src/__generated__", None).expect("load artifact");
    let source = fs::read_to_string(&module_path).expect("read module");
    let output = transform_module(
        &module_path,
        &source,
        &artifact,
        &RewriteOptions::default(),
    )
    .expect("transform")
    .expect("module should be rewritten");

    assert_eq!(
        output.text,
        "import { UsersDocument as _transformed_UsersDocument } from \
         './src/__generated__/graphql'\nconst Q = _transformed_UsersDocument\n"
    );
}

#[test]
fn manifest_switches_to_inline_documents() {
    let dir = TempDir::new().expect("tempdir");
    let manifest_path = dir.path().join("manifest.json");
    fs::write(
        &manifest_path,
        r#"{"UsersDocument":{"kind":"Document","definitions":[]}}"#,
    )
    .expect("write manifest");

    let artifact = load_artifact("./src/__generated__", Some(&manifest_path))
        .expect("load artifact");
    assert!(matches!(artifact, ArtifactReference::Documents(_)));

    let output = transform_module(
        Path::new("users.ts"),
        MODULE,
        &artifact,
        &RewriteOptions::default(),
    )
    .expect("transform")
    .expect("module should be rewritten");

    assert_eq!(
        output.text,
        "const _transformed_UsersDocument = {\"definitions\":[],\"kind\":\"Document\"}\n\
         const Q = _transformed_UsersDocument\n"
    );
}

#[test]
fn missing_manifest_entry_aborts() {
    let dir = TempDir::new().expect("tempdir");
    let manifest_path = dir.path().join("manifest.json");
    fs::write(&manifest_path, "{}").expect("write manifest");

    let artifact = load_artifact("./gen", Some(&manifest_path)).expect("load artifact");
    let err = transform_module(
        Path::new("users.ts"),
        MODULE,
        &artifact,
        &RewriteOptions::default(),
    )
    .expect_err("lookup should fail");
    assert!(err.to_string().contains("users.ts"));
}

#[test]
fn unreadable_manifest_is_fatal() {
    assert!(load_artifact("./gen", Some(Path::new("/no/such/manifest.json"))).is_err());

    let dir = TempDir::new().expect("tempdir");
    let manifest_path = dir.path().join("manifest.json");
    fs::write(&manifest_path, "not json").expect("write manifest");
    assert!(load_artifact("./gen", Some(&manifest_path)).is_err());
}

#[test]
fn filter_and_prefilter_gate_the_rewriter() {
    let filter = ModuleFilter::new(&[], &[]).expect("defaults");
    assert!(filter.matches(Path::new("src/pages/Users.tsx")));
    assert!(!filter.matches(Path::new("node_modules/pkg/index.ts")));

    // Custom function names flow through the pre-filter
    let options = RewriteOptions {
        definition_function: "gql".to_string(),
        binding_function: "unwrapFragment".to_string(),
    };
    let artifact = ArtifactReference::Directory("./gen".to_string());

    let skipped = transform_module(
        Path::new("a.ts"),
        "const Q = graphql(`query X { f }`)\n",
        &artifact,
        &options,
    )
    .expect("transform");
    assert!(skipped.is_none(), "default names are not configured here");

    let rewritten = transform_module(
        Path::new("a.ts"),
        "const Q = gql(`query X { f }`)\n",
        &artifact,
        &options,
    )
    .expect("transform")
    .expect("module should be rewritten");
    assert!(rewritten.text.contains("_transformed_XDocument"));
}
