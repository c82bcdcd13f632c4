use std::fs;
use std::path::{Path, PathBuf};

use scone::ignore::{parse_ignore_file, IGNORE_FILE};
use scone::processor::{get_target_path, is_template_path, process_template};
use scone::renderer::MiniJinjaRenderer;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_is_template_path() {
    assert!(is_template_path("setup.py.j2"));
    assert!(is_template_path(".travis.yml.j2"));
    assert!(is_template_path("configure.zcml.j2"));
    assert!(!is_template_path("README.rst"));
    assert!(!is_template_path("file.j2"));
    assert!(!is_template_path("file.j2txt"));
}

#[test]
fn test_get_target_path() {
    let target_dir = Path::new("output");

    let (path, rendered) = get_target_path("setup.py.j2", target_dir);
    assert_eq!(path, PathBuf::from("output/setup.py"));
    assert!(rendered);

    let (path, rendered) = get_target_path("src/collective/configure.zcml.j2", target_dir);
    assert_eq!(path, PathBuf::from("output/src/collective/configure.zcml"));
    assert!(rendered);

    let (path, rendered) = get_target_path("CHANGES.rst", target_dir);
    assert_eq!(path, PathBuf::from("output/CHANGES.rst"));
    assert!(!rendered);
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_process_template() {
    let template_dir = TempDir::new().unwrap();
    let template = template_dir.path();
    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path();

    write(&template.join("scone.yaml"), "questions: {}");
    write(
        &template.join("README.rst.j2"),
        "{{ package.dottedname }}\n====\n",
    );
    write(
        &template.join("src/{{ package.namespace }}/notes.txt"),
        "plain {{ copy }}\n",
    );
    write(
        &template.join("{% if false %}skip.txt{% endif %}"),
        "never written\n",
    );

    let context = json!({
        "package": {"dottedname": "collective.task", "namespace": "collective"}
    });
    let engine = MiniJinjaRenderer::new();
    let ignored = parse_ignore_file(template.join(IGNORE_FILE)).unwrap();

    process_template(template, output, &context, &engine, ignored).unwrap();

    // Rendered file loses the .j2 suffix and resolves expressions
    let readme = fs::read_to_string(output.join("README.rst")).unwrap();
    assert_eq!(readme, "collective.task\n====\n");

    // Path expressions render; content of non-.j2 files is copied verbatim
    let notes = fs::read_to_string(output.join("src/collective/notes.txt")).unwrap();
    assert_eq!(notes, "plain {{ copy }}\n");

    // Configuration files never reach the output
    assert!(!output.join("scone.yaml").exists());

    // Paths rendering to nothing are skipped
    assert!(!output.join("skip.txt").exists());
    assert!(!output.join("never written").exists());
}

#[test]
fn test_process_template_honors_ignore_file() {
    let template_dir = TempDir::new().unwrap();
    let template = template_dir.path();
    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path();

    write(&template.join(IGNORE_FILE), "*.pyc\n");
    write(&template.join("module.pyc"), "compiled");
    write(&template.join("module.py"), "source");

    let engine = MiniJinjaRenderer::new();
    let ignored = parse_ignore_file(template.join(IGNORE_FILE)).unwrap();

    process_template(template, output, &json!({}), &engine, ignored).unwrap();

    assert!(output.join("module.py").exists());
    assert!(!output.join("module.pyc").exists());
    assert!(!output.join(IGNORE_FILE).exists());
}
