//! 소셜 OAuth 클라이언트 CLI
//!
//! 환경 변수로 설정된 프로바이더를 등록하고 한 번의 OAuth 작업을 실행합니다.
//!
//! ```bash
//! PROFILE=dev social_oauth2 auth-url kakao
//! social_oauth2 token kakao <authorization_code>
//! social_oauth2 refresh naver <refresh_token>
//! social_oauth2 userinfo google <access_token>
//! ```

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use uuid::Uuid;
use social_oauth2::config::OAuthConfig;
use social_oauth2::{OAuth2Client, OAuthResult, ReqwestExecutor, RequestContext, TokenInfo, UserInfo};

#[derive(Debug, Parser)]
#[command(name = "social_oauth2", about = "Google / Kakao / Naver OAuth 2.0 client", disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// 인증 URL 출력
    AuthUrl {
        provider: String,
        /// 생략하면 새로 생성합니다
        state: Option<String>,
    },
    /// Authorization code를 토큰으로 교환
    Token { provider: String, code: String },
    /// Refresh token으로 토큰 갱신
    Refresh { provider: String, refresh_token: String },
    /// 사용자 정보 조회
    Userinfo { provider: String, access_token: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_status = load_env_file();
    init_logging();
    info!("{}", env_status);

    let cli = Cli::parse();
    let client = OAuth2Client::from_env(Arc::new(ReqwestExecutor::new()));
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(OAuthConfig::request_timeout_secs()));

    match run(&client, &ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &OAuth2Client, ctx: &RequestContext, command: Commands) -> OAuthResult<()> {
    match command {
        Commands::AuthUrl { provider, state } => {
            let state = state.unwrap_or_else(generate_state);
            let url = client.request_auth_url(&provider, &state);
            if url.is_empty() {
                error!("{} 인증 URL을 만들 수 없습니다. 등록된 프로바이더: {:?}", provider, client.providers());
            }
            println!("state: {}", state);
            println!("url:   {}", url);
        }
        Commands::Token { provider, code } => {
            let token = client.request_token(ctx, &provider, &code).await?;
            print_token(token.as_ref());
        }
        Commands::Refresh { provider, refresh_token } => {
            let token = client.request_refresh_token(ctx, &provider, &refresh_token).await?;
            print_token(token.as_ref());
        }
        Commands::Userinfo { provider, access_token } => {
            let user = client.request_user_info(ctx, &provider, &access_token).await?;
            print_user(user.as_ref());
        }
    }

    Ok(())
}

fn print_token(token: &dyn TokenInfo) {
    println!("access_token:  {}", token.access_token());
    println!("refresh_token: {}", token.refresh_token());
    println!("expires_in:    {}", token.expiry());
}

fn print_user(user: &dyn UserInfo) {
    println!("id:            {}", user.id());
    println!("email:         {}", user.email());
    println!("name:          {}", user.name());
    println!("gender:        {}", user.gender());
    println!("profile_image: {}", user.profile_image());
}

/// 무작위 state 값을 생성합니다. (128비트 UUID v4, 32자리 hex)
///
/// 콜백에서의 state 검증은 호출하는 애플리케이션의 책임입니다.
fn generate_state() -> String {
    Uuid::new_v4().simple().to_string()
}

/// PROFILE 환경 변수에 따라 .env 파일을 로드하고 결과 메시지를 반환합니다
///
/// 로거 초기화 전에 호출되므로 메시지는 호출자가 로깅합니다.
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev social_oauth2 auth-url google
///
/// # 운영 환경
/// PROFILE=prod social_oauth2 auth-url google
/// ```
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => format!("Current profile: {}, {} 파일 로드 됨", profile, file),
        Err(e) => format!("Current profile: {}, env 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=social_oauth2=debug social_oauth2 token kakao <code>
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
