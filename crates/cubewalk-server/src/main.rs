use cubewalk_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    if !config.static_dir.is_dir() {
        log::warn!(
            "static root {} does not exist; every request will 404",
            config.static_dir.display()
        );
    }
    cubewalk_server::serve(config).await
}
