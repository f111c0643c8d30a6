/// CLI tests: run the built binary against descriptors in a temp directory.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_beanfacts");

#[test]
fn test_writes_tables_to_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("beans.xml"),
        r#"<beans><bean id="svc" class="com.Svc" init-method="start"/></beans>"#,
    )
    .unwrap();

    let status = Command::new(BIN)
        .arg("beans.xml")
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(fs::read_to_string(dir.path().join("BeanClasses.csv")).unwrap(), "com.Svc\n");
    assert_eq!(fs::read_to_string(dir.path().join("BeanInit.csv")).unwrap(), "com.Svc\tstart\n");
    assert_eq!(fs::read_to_string(dir.path().join("BeanReachable.csv")).unwrap(), "");
    assert_eq!(fs::read_to_string(dir.path().join("BeanIoCField.csv")).unwrap(), "");
}

#[test]
fn test_json_report_and_output_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("facts");
    fs::create_dir(&out).unwrap();
    let input = dir.path().join("beans.xml");
    fs::write(
        &input,
        r#"<beans>
            <bean id="webscript"/>
            <bean id="page" parent="webscript" class="com.Page"/>
        </beans>"#,
    )
    .unwrap();
    let report = dir.path().join("report.json");

    let status = Command::new(BIN)
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--json")
        .arg(&report)
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(
        fs::read_to_string(out.join("BeanReachable.csv")).unwrap(),
        "com.Page\texecuteImpl\n"
    );
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["name"], "page");
    assert_eq!(json[1]["webscript"], true);
    assert_eq!(json[0]["webscript"], false);
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = Command::new(BIN)
        .arg("does-not-exist.xml")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.xml"));
}
