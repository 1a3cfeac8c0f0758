use std::env;

pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    const DEFAULT_PORT: u16 = 3030;

    pub fn new() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        ServerConfig { port }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::ServerConfig;

    #[test]
    fn port_comes_from_env_with_default() {
        env::remove_var("PORT");
        assert_eq!(ServerConfig::new().port, 3030);

        env::set_var("PORT", "not-a-port");
        assert_eq!(ServerConfig::new().port, 3030);

        env::set_var("PORT", "8080");
        assert_eq!(ServerConfig::new().port, 8080);
        env::remove_var("PORT");
    }
}
