//! MTR 下载帧命令行工具
//!
//! 从配置档案生成付费电话终端的下载帧。
//!
//! # Usage
//!
//! ```bash
//! # 按配置文件构建多个档案
//! mtr build --config mtr.toml --profile lobby.json --profile airport.json
//!
//! # 覆盖代际并以原始字节写入目录
//! mtr build --profile lobby.json --mtr 1 --format raw --output frames/
//!
//! # 查看 MTR 1.x 的偏移表
//! mtr layout --mtr 1 --tel-len 12
//! ```

use clap::{Parser, Subcommand};
use mtr_app::{build_all, render_layout, AppConfig, OutputFormat};
use mtr_frame::{FeatureConfig, FieldCatalog, ProtocolContext};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 付费电话下载帧工具
#[derive(Parser, Debug)]
#[command(name = "mtr")]
#[command(about = "Payphone terminal download-frame encoder")]
#[command(version)]
struct Args {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// 协议上下文参数
#[derive(clap::Args, Debug)]
struct ProtocolArgs {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 固件代际 (1 或 2)
    #[arg(long)]
    mtr: Option<u8>,

    /// 长途电话号码位数
    #[arg(long)]
    tel_len: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 为每个档案构建下载帧
    Build {
        /// 档案 JSON 文件，可重复
        #[arg(short, long, required = true)]
        profile: Vec<PathBuf>,

        #[command(flatten)]
        protocol: ProtocolArgs,

        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,

        /// 输出目录，未指定时写到标准输出
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 打印帧偏移表
    Layout {
        #[command(flatten)]
        protocol: ProtocolArgs,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 生成示例配置文件
    GenConfig {
        /// 输出文件路径
        #[arg(short, long, default_value = "mtr.toml")]
        output: PathBuf,
    },

    /// 以 JSON 写出默认档案
    DefaultProfile {
        /// 输出文件路径
        #[arg(short, long, default_value = "profile.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.command {
        Commands::Build { protocol, .. } | Commands::Layout { protocol, .. } => {
            load_config(protocol.config.as_deref())?
        }
        _ => AppConfig::default(),
    };

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Build {
            profile,
            protocol,
            format,
            output,
        } => {
            let ctx = config.protocol_with(protocol.mtr, protocol.tel_len)?;
            cmd_build(profile, ctx, format, output.as_deref()).await
        }
        Commands::Layout { protocol, json } => {
            let ctx = config.protocol_with(protocol.mtr, protocol.tel_len)?;
            cmd_layout(&ctx, json)
        }
        Commands::GenConfig { output } => cmd_gen_config(&output),
        Commands::DefaultProfile { output } => cmd_default_profile(&output),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(AppConfig::from_file(path)?),
        None => Ok(AppConfig::default()),
    }
}

async fn cmd_build(
    profiles: Vec<PathBuf>,
    ctx: ProtocolContext,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if output.is_none() {
        format.check_stdout(profiles.len())?;
    }
    let frames = build_all(profiles, ctx).await?;

    if let Some(dir) = output {
        std::fs::create_dir_all(dir)?;
        for frame in &frames {
            let path = dir.join(format!("{}.{}", frame.stem(), format.extension()));
            std::fs::write(&path, format.render(&frame.bytes))?;
            info!(profile = %frame.name, path = %path.display(), "frame written");
        }
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        if format.is_text() {
            out.write_all(frame.name.as_bytes())?;
            out.write_all(b": ")?;
            out.write_all(&format.render(&frame.bytes))?;
            out.write_all(b"\n")?;
        } else {
            out.write_all(&frame.bytes)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn cmd_layout(ctx: &ProtocolContext, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = FieldCatalog::feature_config();
    let layout = catalog.layout(ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!(
            "{} (telephone length {}): {} bytes",
            ctx.generation(),
            ctx.tel_num_len(),
            catalog.frame_len(ctx)
        );
        print!("{}", render_layout(&layout));
    }
    Ok(())
}

fn cmd_gen_config(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let toml_str = AppConfig::default().to_toml()?;

    let content = format!(
        r#"# MTR Download Frame Configuration
# Generated by mtr gen-config

{}
"#,
        toml_str
    );

    std::fs::write(output, content)?;
    println!("Generated configuration file: {}", output.display());
    Ok(())
}

fn cmd_default_profile(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = FeatureConfig::default().to_json_pretty()?;
    std::fs::write(output, json)?;
    println!("Generated default profile: {}", output.display());
    Ok(())
}
