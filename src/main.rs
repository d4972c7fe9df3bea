use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use user_registry::infrastructure::config::{self, EnvFile};
use user_registry::infrastructure::{AppConfig, Logger};
use user_registry::{routes, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先加载 .env，日志级别可能来自其中
    let env_file = config::load_env_file();
    let config = AppConfig::from_env()?;
    Logger::init(&config.logging.level);

    match env_file {
        EnvFile::Loaded(path) => info!("已加载环境文件: {}", path.display()),
        EnvFile::Missing => warn!("未找到 .env 文件，使用进程环境变量"),
        EnvFile::Invalid(e) => warn!(".env 文件加载失败，已忽略: {}", e),
    }

    info!("启动用户服务...");

    let store = UserStore::with_seed();
    info!("✅ 已初始化 {} 个示例用户", store.len());

    let app = routes::build_app(store, &config.http);

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    let base = config.http.base_path();
    info!("🚀 用户服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}/users      - 获取所有用户", base);
    info!("   POST   {}/users      - 创建新用户", base);
    info!("   GET    {}/users/:id  - 获取特定用户", base);
    info!("   GET    {}/health     - 健康检查", base);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到 ctrl+c，开始关闭服务器"),
        Err(e) => {
            error!("无法监听 ctrl+c 信号: {}", e);
            std::future::pending::<()>().await
        }
    }
}
