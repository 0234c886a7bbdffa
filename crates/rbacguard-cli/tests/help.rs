use assert_cmd::Command;

/// Helper to get a Command for the rbacguard binary.
#[allow(deprecated)]
fn rbacguard_cmd() -> Command {
    Command::cargo_bin("rbacguard").unwrap()
}

#[test]
fn help_works() {
    rbacguard_cmd().arg("--help").assert().success();
}

#[test]
fn validate_help_works() {
    rbacguard_cmd().args(["validate", "--help"]).assert().success();
}

#[test]
fn validate_requires_a_file_argument() {
    rbacguard_cmd().arg("validate").assert().failure();
}
