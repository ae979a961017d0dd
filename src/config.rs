//! 配置模块：
//! - 定义运行期只读的 `Settings`
//! - 有效值优先级：CLI > 环境变量（LANDING_*）> 默认值

use anyhow::{bail, Result};
use std::{num::NonZeroUsize, path::PathBuf};

use crate::{
    cli::Cli,
    render::ButtonDefaults,
    utils::{env_opt_parse, env_opt_path, env_opt_string},
};

pub(crate) const DEFAULT_BUTTON_WIDTH: u32 = 220;
pub(crate) const DEFAULT_BUTTON_HEIGHT: u32 = 100;
pub(crate) const DEFAULT_BUTTON_COLOR: &str = "DarkOrange";
pub(crate) const DEFAULT_HOVER_BUTTON_COLOR: &str = "Orange";
pub(crate) const DEFAULT_MAX_BUTTON_PER_LINE: usize = 2;
pub(crate) const DEFAULT_FONTSIZE: u32 = 20;
pub(crate) const DEFAULT_OUTDIR: &str = "out/";
pub(crate) const DEFAULT_TEMPLATE_DIR: &str = "templates/";

/// 环境变量覆盖项（未设置或无法解析的为 None）
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvOverrides {
    pub(crate) button_width: Option<u32>,
    pub(crate) button_height: Option<u32>,
    pub(crate) button_color: Option<String>,
    pub(crate) hover_button_color: Option<String>,
    pub(crate) max_button_per_line: Option<usize>,
    pub(crate) fontsize: Option<u32>,
    pub(crate) outdir: Option<PathBuf>,
    pub(crate) template_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub(crate) fn from_env() -> Self {
        EnvOverrides {
            button_width: env_opt_parse("LANDING_BUTTON_WIDTH"),
            button_height: env_opt_parse("LANDING_BUTTON_HEIGHT"),
            button_color: env_opt_string("LANDING_BUTTON_COLOR"),
            hover_button_color: env_opt_string("LANDING_HOVER_BUTTON_COLOR"),
            max_button_per_line: env_opt_parse("LANDING_MAX_BUTTON_PER_LINE"),
            fontsize: env_opt_parse("LANDING_FONTSIZE"),
            outdir: env_opt_path("LANDING_OUTDIR"),
            template_dir: env_opt_path("LANDING_TEMPLATE_DIR"),
        }
    }
}

/// 一次运行的有效配置
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) infiles: Vec<PathBuf>,
    pub(crate) button_width: u32,
    pub(crate) button_height: u32,
    pub(crate) button_color: String,
    pub(crate) hover_button_color: String,
    pub(crate) max_button_per_line: NonZeroUsize,
    pub(crate) fontsize: u32,
    pub(crate) outdir: PathBuf,
    pub(crate) template_dir: PathBuf,
}

impl Settings {
    /// 合并 CLI 与环境变量，计算有效配置
    pub(crate) fn resolve(cli: Cli, env: EnvOverrides) -> Result<Self> {
        let per_line = cli
            .max_button_per_line
            .or(env.max_button_per_line)
            .unwrap_or(DEFAULT_MAX_BUTTON_PER_LINE);
        let Some(max_button_per_line) = NonZeroUsize::new(per_line) else {
            bail!("每行最多按钮数必须大于 0");
        };

        Ok(Settings {
            infiles: cli.infiles,
            button_width: cli.button_width.or(env.button_width).unwrap_or(DEFAULT_BUTTON_WIDTH),
            button_height: cli.button_height.or(env.button_height).unwrap_or(DEFAULT_BUTTON_HEIGHT),
            button_color: cli
                .button_color
                .or(env.button_color)
                .unwrap_or_else(|| DEFAULT_BUTTON_COLOR.to_string()),
            hover_button_color: cli
                .hover_button_color
                .or(env.hover_button_color)
                .unwrap_or_else(|| DEFAULT_HOVER_BUTTON_COLOR.to_string()),
            max_button_per_line,
            fontsize: cli.fontsize.or(env.fontsize).unwrap_or(DEFAULT_FONTSIZE),
            outdir: cli.outdir.or(env.outdir).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR)),
            template_dir: cli
                .template_dir
                .or(env.template_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
        })
    }

    pub(crate) fn button_defaults(&self) -> ButtonDefaults {
        ButtonDefaults { button_color: self.button_color.clone() }
    }
}
