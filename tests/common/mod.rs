//! Common test utilities for amdpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Component module with an `init` entry point
#[allow(dead_code)]
pub const COMPONENT_SOURCE: &str = "define(function() {\n    return { init: function() {} };\n});\n";

/// Extension module with no `init`
#[allow(dead_code)]
pub const EXTENSION_SOURCE: &str = "define(function() {\n    return {};\n});\n";

/// A temporary project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Project with an index page declaring the `hello` and `world` components
    /// and a static about page
    #[allow(dead_code)]
    pub fn hello_world() -> Self {
        let project = Self::new();
        project.write_file(
            "index.html",
            r#"<html>
<body>
  <div data-component="hello"></div>
  <div data-component="world"></div>
  <script src="require.js" data-main="bootstrap-index"></script>
</body>
</html>
"#,
        );
        project.write_file("about.html", "<html><body><p>About us</p></body></html>\n");
        project.write_file(
            "app.js",
            "define(function() {\n    return { use: function() { return this; } };\n});\n",
        );
        project.create_component("hello");
        project.create_component("world");
        project
    }

    /// Write `components/<name>/component.js`
    #[allow(dead_code)]
    pub fn create_component(&self, name: &str) {
        self.write_file(
            &format!("components/{name}/component.js"),
            COMPONENT_SOURCE,
        );
    }

    /// Write `extensions/<name>/extension.js`
    #[allow(dead_code)]
    pub fn create_extension(&self, name: &str) {
        self.write_file(
            &format!("extensions/{name}/extension.js"),
            EXTENSION_SOURCE,
        );
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}
