use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_valid_login() {
    cargo_bin_cmd!("quickfund")
        .args(["validate", "--email", "a@b.co", "--password", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_short_password_and_bad_email() {
    cargo_bin_cmd!("quickfund")
        .args(["validate", "--email", "not-an-email", "--password", "12345"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("email: Email is invalid"))
        .stdout(predicate::str::contains(
            "password: Password must be at least 6 characters",
        ))
        .stderr(predicate::str::contains("2 field(s) failed validation"));
}

#[test]
fn test_signup_requires_role_and_name() {
    cargo_bin_cmd!("quickfund")
        .args([
            "validate",
            "--mode",
            "signup",
            "--email",
            "a@b.co",
            "--password",
            "123456",
            "--phone",
            "98765-43210",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("name: Name is required"))
        .stdout(predicate::str::contains("role: Please select a role"))
        .stdout(predicate::str::contains("phone").not());
}

#[test]
fn test_organization_signup_needs_organization_name() {
    cargo_bin_cmd!("quickfund")
        .args([
            "validate",
            "--mode",
            "signup",
            "--name",
            "Asha",
            "--email",
            "a@b.co",
            "--password",
            "123456",
            "--phone",
            "(987) 654-3210",
            "--role",
            "organization",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "organization: Organization name is required",
        ));
}
