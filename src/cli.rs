//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 所有选项都是可选的，未指定时依次回退到环境变量与默认值（见 `config`）。

use clap::Parser;
use std::path::PathBuf;

/// 根据 JSON/CSV 中的按钮描述生成静态落地页
#[derive(Parser, Debug)]
#[command(name = "landing", about = "静态落地页生成器：读取 json/csv 按钮列表，渲染 index.html 与 index.css", version)]
pub(crate) struct Cli {
    /// 按钮定义文件（.json 或 .csv），可指定多个，按顺序拼接
    #[arg(value_name = "INFILES", required = true, num_args = 1..)]
    pub(crate) infiles: Vec<PathBuf>,
    /// 按钮默认宽度（CSS 像素），默认 220
    #[arg(long, visible_alias = "sx", value_name = "PX")]
    pub(crate) button_width: Option<u32>,
    /// 按钮默认高度（CSS 像素），默认 100
    #[arg(long, visible_alias = "sy", value_name = "PX")]
    pub(crate) button_height: Option<u32>,
    /// 按钮默认背景色（CSS 颜色），默认 DarkOrange
    #[arg(long, visible_alias = "bc", value_name = "COLOR")]
    pub(crate) button_color: Option<String>,
    /// 鼠标悬停时的背景色（CSS 颜色），默认 Orange
    #[arg(long, visible_alias = "hc", value_name = "COLOR")]
    pub(crate) hover_button_color: Option<String>,
    /// 每行最多按钮数，默认 2
    #[arg(short = 'l', long, value_name = "N")]
    pub(crate) max_button_per_line: Option<usize>,
    /// 按钮文字字号（CSS 像素），默认 20
    #[arg(short, long, value_name = "PX")]
    pub(crate) fontsize: Option<u32>,
    /// 输出目录（必须已存在），默认 out/
    #[arg(short, long, value_name = "DIR")]
    pub(crate) outdir: Option<PathBuf>,
    /// 模板目录（需包含 index.html 与 index.css），默认 templates/
    #[arg(short, long, value_name = "DIR")]
    pub(crate) template_dir: Option<PathBuf>,
}
