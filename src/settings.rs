/// Settings the checkout flow reads: the current auth token and whether the
/// app runs against a simulated backend.
///
/// Injected through constructors rather than resolved from a registry, so
/// tests can hand each flow its own configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    auth_token: String,
    use_mock_mode: bool,
}

impl Settings {
    pub fn new(auth_token: impl Into<String>, use_mock_mode: bool) -> Self {
        Self {
            auth_token: auth_token.into(),
            use_mock_mode,
        }
    }

    pub fn auth_token(&self) -> String {
        self.auth_token.clone()
    }

    pub fn use_mock_mode(&self) -> bool {
        self.use_mock_mode
    }
}
