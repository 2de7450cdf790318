//! PrintDesk Server - 打印店订单与会员登记系统
//!
//! # 架构概述
//!
//! 本模块是 PrintDesk 服务端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **认证** (`auth`): 管理员共享凭证门禁 (Basic)
//! - **Blob 存储** (`storage`): 内容寻址的上传文件存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 管理员认证
//! ├── storage/       # Blob 存储
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use auth::AdminCredentials;
pub use core::{Config, Server, ServerState, setup_environment};
pub use storage::BlobStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____       _       __  ____            __
   / __ \_____(_)___  / /_/ __ \___  _____/ /__
  / /_/ / ___/ / __ \/ __/ / / / _ \/ ___/ //_/
 / ____/ /  / / / / / /_/ /_/ /  __(__  ) ,<
/_/   /_/  /_/_/ /_/\__/_____/\___/____/_/|_|
    "#
    );
}
