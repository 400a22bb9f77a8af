//! End-to-end build tests: scan, bundle, rewrite, cleanup

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn amdpack_cmd() -> Command {
    Command::cargo_bin("amdpack").unwrap()
}

fn build(project: &common::TestProject, extra: &[&str]) {
    amdpack_cmd()
        .current_dir(&project.path)
        .arg("build")
        .args(extra)
        .assert()
        .success();
}

#[test]
fn test_build_index_page() {
    let project = common::TestProject::hello_world();

    amdpack_cmd()
        .current_dir(&project.path)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap-index"))
        .stdout(predicate::str::contains("2 component(s) initialised"));

    let expected = "define('components/hello/component', function() {
    return { init: function() {} };
});

define('components/world/component', function() {
    return { init: function() {} };
});

require([\"components/hello/component\", \"components/world/component\"], function(a, b) {
    a.init();
    b.init();
});
";
    assert_eq!(project.read_file("release/bootstrap-index.js"), expected);
}

#[test]
fn test_static_page_gets_no_unit() {
    let project = common::TestProject::hello_world();
    build(&project, &[]);

    assert!(project.file_exists("release/about.html"));
    assert!(!project.file_exists("release/bootstrap-about.js"));
}

#[test]
fn test_app_module_is_not_bundled() {
    let project = common::TestProject::hello_world();
    build(&project, &[]);

    let unit = project.read_file("release/bootstrap-index.js");
    assert!(!unit.contains("use: function()"));
    assert!(project.file_exists("release/app.js"));
}

#[test]
fn test_extensions_are_loaded_but_not_initialised() {
    let project = common::TestProject::new();
    project.write_file(
        "about.html",
        r#"<section data-component="c1"></section><section data-component="c2"></section>"#,
    );
    project.write_file(
        "bootstrap-about.js",
        "require(['app'], function(app) {\n    app.use('e1', 'e2');\n    app.start();\n});\n",
    );
    project.write_file("app.js", common::EXTENSION_SOURCE);
    project.create_extension("e1");
    project.create_extension("e2");
    project.create_component("c1");
    project.create_component("c2");

    build(&project, &[]);

    let unit = project.read_file("release/bootstrap-about.js");
    assert!(unit.contains("define('extensions/e1/extension', function()"));
    assert!(unit.contains("define('extensions/e2/extension', function()"));
    assert!(!unit.contains("app.start()"));
    assert!(unit.ends_with(
        "require([\"extensions/e1/extension\", \"extensions/e2/extension\", \"components/c1/component\", \"components/c2/component\"], function(a, b, c, d) {
    c.init();
    d.init();
});
"
    ));
    assert!(!unit.contains("a.init()"));
    assert!(!unit.contains("b.init()"));
}

#[test]
fn test_component_with_regex_literal_is_initialised() {
    let project = common::TestProject::new();
    project.write_file("index.html", r#"<div data-component="quote"></div>"#);
    project.write_file(
        "components/quote/component.js",
        "define(function() {
    var strip = /'[^']*'/g;
    function escape(s) { return s.replace(/\"/g, '&quot;'); }
    return { init: function() {}, escape: escape, strip: strip };
});
",
    );

    amdpack_cmd()
        .current_dir(&project.path)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 component(s) initialised"));

    let unit = project.read_file("release/bootstrap-index.js");
    assert!(unit.ends_with(
        "require([\"components/quote/component\"], function(a) {
    a.init();
});
"
    ));
}

#[test]
fn test_rewrite_targets_entry_call_not_nested_require() {
    let project = common::TestProject::new();
    project.write_file("index.html", r#"<div data-component="a"></div>"#);
    project.write_file(
        "release/bootstrap-index.js",
        r#"require(["components/a/component"], function(a) { require(['lazy']); });
"#,
    );

    amdpack_cmd()
        .current_dir(&project.path)
        .arg("rewrite")
        .assert()
        .success();

    assert_eq!(
        project.read_file("release/bootstrap-index.js"),
        "require([\"components/a/component\"], function(a) {
    a.init();
});
"
    );
}

#[test]
fn test_build_is_idempotent() {
    let project = common::TestProject::hello_world();

    build(&project, &[]);
    let first = project.read_file("release/bootstrap-index.js");
    build(&project, &[]);
    let second = project.read_file("release/bootstrap-index.js");

    assert_eq!(first, second);
}

#[test]
fn test_rewrite_after_build_changes_nothing() {
    let project = common::TestProject::hello_world();
    build(&project, &[]);
    let built = project.read_file("release/bootstrap-index.js");

    amdpack_cmd()
        .current_dir(&project.path)
        .arg("rewrite")
        .assert()
        .success();

    assert_eq!(project.read_file("release/bootstrap-index.js"), built);
}

#[test]
fn test_artifacts_are_removed() {
    let project = common::TestProject::hello_world();
    build(&project, &[]);

    assert!(!project.file_exists("release/build.txt"));
    assert!(!project.file_exists("release/build.js"));
}

#[test]
fn test_keep_artifacts() {
    let project = common::TestProject::hello_world();
    build(&project, &["--keep-artifacts"]);

    let log = project.read_file("release/build.txt");
    assert!(log.contains("bootstrap-index.js"));
    assert!(log.contains("components/hello/component.js"));
}

#[test]
fn test_combined_sources_are_removed_from_output() {
    let project = common::TestProject::hello_world();
    build(&project, &[]);

    assert!(!project.file_exists("release/components/hello/component.js"));
    assert!(!project.file_exists("release/components/world/component.js"));
}

#[test]
fn test_excluded_files_are_not_copied() {
    let project = common::TestProject::hello_world();
    project.write_file("README.md", "# site");
    project.write_file("node_modules/requirejs/require.js", "");
    project.write_file(".hidden", "");
    build(&project, &[]);

    assert!(project.file_exists("release/index.html"));
    assert!(!project.file_exists("release/README.md"));
    assert!(!project.file_exists("release/node_modules"));
    assert!(!project.file_exists("release/.hidden"));
}

#[test]
fn test_out_override() {
    let project = common::TestProject::hello_world();
    build(&project, &["--out", "dist"]);

    assert!(project.file_exists("dist/bootstrap-index.js"));
    assert!(!project.file_exists("release"));
}

#[test]
fn test_config_file_settings() {
    let project = common::TestProject::hello_world();
    project.write_file(
        "amdpack.yaml",
        "out_dir: ./public/\nremove_combined: false\nartifacts:\n  - build.js\n",
    );
    build(&project, &[]);

    assert!(project.file_exists("public/bootstrap-index.js"));
    assert!(project.file_exists("public/components/hello/component.js"));
    assert!(project.file_exists("public/build.txt"));
    assert!(!project.file_exists("public/amdpack.yaml"));
}

#[test]
fn test_explicit_config_file() {
    let project = common::TestProject::hello_world();
    project.write_file("conf/alt.yaml", "out_dir: ./alt-out/\n");

    amdpack_cmd()
        .current_dir(&project.path)
        .args(["build", "-c", "conf/alt.yaml"])
        .assert()
        .success();

    assert!(project.file_exists("alt-out/bootstrap-index.js"));
}

#[test]
fn test_path_aliases() {
    let project = common::TestProject::new();
    project.write_file("index.html", r#"<div data-component="map"></div>"#);
    project.write_file(
        "bootstrap-index.js",
        "require(['app'], function(app) { app.use('tracking'); });",
    );
    project.write_file("vendor/tracking.js", "define(function() { return {}; });\n");
    project.create_component("map");
    project.write_file(
        "amdpack.yaml",
        "paths:\n  extensions/tracking/extension: vendor/tracking\n",
    );

    build(&project, &[]);

    let unit = project.read_file("release/bootstrap-index.js");
    assert!(unit.contains("define('extensions/tracking/extension', function()"));
    assert!(unit.contains("function(a, b) {\n    b.init();\n});"));
}

#[test]
fn test_verbose_build_logs_to_stderr() {
    let project = common::TestProject::hello_world();

    amdpack_cmd()
        .current_dir(&project.path)
        .args(["build", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("bootstrap-index"));
}
