use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_getids_prints_the_tree_to_stdout() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "src/App.tsx",
        r#"export const App = () => (
    <div>
        <FormattedMessage id="app.title" defaultMessage="Title" />
        <FormattedMessage id="app.inner.title" defaultMessage={"Inner title"} />
        <FormattedMessage id="ok" />
    </div>
);
"#,
    )?;

    let mut cmd = test.getids_command();
    cmd.arg("src");
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "app": {
        "title": {
          "en-gb": "Title"
        },
        "inner": {
          "title": {
            "en-gb": "Inner title"
          }
        }
      },
      "ok": {
        "en-gb": ""
      }
    }

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_getids_additional_languages_get_placeholders() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "src/App.tsx",
        r#"<FormattedMessage id="app.title" defaultMessage="Title" />"#,
    )?;

    let mut cmd = test.getids_command();
    cmd.args(["src", "-l", "en-gb", "-a", "fi-fi, sv-se"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "app": {
        "title": {
          "en-gb": "Title",
          "fi-fi": "",
          "sv-se": ""
        }
      }
    }

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_getids_saves_to_output_file() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "src/App.tsx",
        r#"<FormattedMessage id="app.title" defaultMessage="Title" />"#,
    )?;

    let mut cmd = test.getids_command();
    cmd.args(["src", "-o", "translations/seed.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    success: Successfully saved parsed IDs to: translations/seed.json (1 file(s) scanned).

    ----- stderr -----
    ");

    let saved: Value = serde_json::from_str(&test.read_file("translations/seed.json")?)?;
    assert_eq!(saved, json!({ "app": { "title": { "en-gb": "Title" } } }));
    Ok(())
}

#[test]
fn test_getids_missing_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.getids_command();
    cmd.arg("missing");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: could not find directory: missing.
    ");
    Ok(())
}

#[test]
fn test_getids_markup_without_ids_yields_an_empty_tree() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        "src/App.tsx",
        r#"<FormattedMessage defaultMessage="no id here" />"#,
    )?;

    let mut cmd = test.getids_command();
    cmd.arg("src");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    {}

    ----- stderr -----
    ");
    Ok(())
}
