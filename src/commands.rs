//! 命令调度模块：
//! - 接收解析好的 CLI 参数，计算“有效配置”
//! - 依次执行：读取按钮 -> 排版 -> 渲染模板 -> 写出

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{
    cli::Cli,
    config::{EnvOverrides, Settings},
    grid::render_grid,
    record::{load_file, ButtonRecord},
    templates::{ensure_dir, render_template, TemplateVars},
};

pub(crate) const PAGE_TEMPLATE: &str = "index.html";
pub(crate) const STYLE_TEMPLATE: &str = "index.css";

/// 运行一次生成
pub(crate) fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli, EnvOverrides::from_env())?;
    let written = generate(&settings)?;
    println!(
        "✅ 生成完成: {} 个文件 -> {}",
        written.len(),
        settings.outdir.display()
    );
    Ok(())
}

/// 生成页面与样式表，返回写出的文件路径
///
/// 全部输入读取、两个模板全部渲染成功之后才会写盘，失败时输出目录保持不变。
pub(crate) fn generate(settings: &Settings) -> Result<Vec<PathBuf>> {
    // 读取全部输入，任一文件失败即中止
    let mut records: Vec<ButtonRecord> = Vec::new();
    for path in &settings.infiles {
        let recs = load_file(path).with_context(|| format!("加载按钮失败: {}", path.display()))?;
        println!("读取: {}（{} 个按钮）", path.display(), recs.len());
        records.extend(recs);
    }
    if records.is_empty() {
        eprintln!("警告: 输入文件中没有任何按钮，页面将为空");
    }

    let buttons = render_grid(&records, settings.max_button_per_line, &settings.button_defaults());

    let build_time = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let page_vars = TemplateVars::new()
        .html("buttons", buttons)
        .number("button_count", records.len() as u64)
        .text("build_version", env!("CARGO_PKG_VERSION"))
        .text("build_time", build_time);
    let style_vars = TemplateVars::new()
        .number("button_width", settings.button_width)
        .number("button_height", settings.button_height)
        .css("button_color", settings.button_color.as_str())
        .css("hover_button_color", settings.hover_button_color.as_str())
        .number("fontsize", settings.fontsize);

    let rendered = [
        render_template(PAGE_TEMPLATE, &settings.template_dir, &page_vars)?,
        render_template(STYLE_TEMPLATE, &settings.template_dir, &style_vars)?,
    ];

    ensure_dir(&settings.outdir)?;
    let mut written = Vec::with_capacity(rendered.len());
    for file in &rendered {
        let path = file.write_to(&settings.outdir)?;
        println!("写入: {}", path.display());
        written.push(path);
    }
    Ok(written)
}
