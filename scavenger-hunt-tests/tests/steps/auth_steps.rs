use cucumber::{given, then, when};
use scavenger_hunt_core::{AuthConfig, AuthGate};
use scavenger_hunt_tests::HuntWorld;

// ===== Given Steps =====

#[given(expr = "the admin account {string} with password {string}")]
async fn admin_account(world: &mut HuntWorld, username: String, password: String) {
    world.gate = AuthGate::new(AuthConfig::new(username, password));
}

#[given("an admin account without a password")]
async fn admin_without_password(world: &mut HuntWorld) {
    world.gate = AuthGate::new(AuthConfig::new("admin", ""));
}

// ===== When Steps =====

#[when(expr = "I log in as {string} with password {string}")]
async fn log_in(world: &mut HuntWorld, username: String, password: String) {
    world.last_login = Some(world.gate.login(&username, &password));
}

#[when("I log out")]
async fn log_out(world: &mut HuntWorld) {
    world.gate.logout();
}

// ===== Then Steps =====

#[then("access is granted")]
async fn access_granted(world: &mut HuntWorld) {
    assert_eq!(world.last_login, Some(true));
    assert!(world.gate.is_authenticated());
}

#[then("access is denied")]
async fn access_denied(world: &mut HuntWorld) {
    assert_eq!(world.last_login, Some(false));
    assert!(!world.gate.is_authenticated());
}

#[then(expr = "the login error is {string}")]
async fn login_error(world: &mut HuntWorld, message: String) {
    assert_eq!(world.gate.error(), Some(message.as_str()));
}

#[then("no login error is shown")]
async fn no_login_error(world: &mut HuntWorld) {
    assert_eq!(world.gate.error(), None);
}

#[then("the admin area is locked")]
async fn admin_area_locked(world: &mut HuntWorld) {
    assert!(!world.gate.is_authenticated());
}
