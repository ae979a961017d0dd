//! 模板渲染与写出模块：
//! - `TemplateVars` 区分纯文本（转义）、数字与 `SafeHtml`（原样输出）
//! - 先渲染为 `RenderedFile`，确认全部成功后再写入输出目录（目录不存在即报错）

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tera::{Context as TContext, Tera};

use crate::markup::{escape, SafeHtml};

/// 模板变量值
#[derive(Debug, Clone)]
pub(crate) enum TemplateValue {
    /// 普通文本，写入前转义
    Text(String),
    Number(u64),
    /// 样式表文本，不做 HTML 转义，原样写入 `.css`
    Css(String),
    /// 已渲染的 HTML，原样写入
    Html(SafeHtml),
}

/// 一次渲染所需的全部变量（保持插入顺序）
#[derive(Debug, Clone, Default)]
pub(crate) struct TemplateVars {
    entries: Vec<(String, TemplateValue)>,
}

impl TemplateVars {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.entries.push((name.to_string(), TemplateValue::Text(value.into())));
        self
    }

    pub(crate) fn number(mut self, name: &str, value: impl Into<u64>) -> Self {
        self.entries.push((name.to_string(), TemplateValue::Number(value.into())));
        self
    }

    pub(crate) fn css(mut self, name: &str, value: impl Into<String>) -> Self {
        self.entries.push((name.to_string(), TemplateValue::Css(value.into())));
        self
    }

    pub(crate) fn html(mut self, name: &str, value: SafeHtml) -> Self {
        self.entries.push((name.to_string(), TemplateValue::Html(value)));
        self
    }

    // 模板引擎自身的 autoescape 关闭，转义完全由值的类型决定
    fn to_context(&self) -> TContext {
        let mut ctx = TContext::new();
        for (name, value) in &self.entries {
            match value {
                TemplateValue::Text(s) => ctx.insert(name.as_str(), escape(s).as_str()),
                TemplateValue::Number(n) => ctx.insert(name.as_str(), n),
                TemplateValue::Css(s) => ctx.insert(name.as_str(), s),
                TemplateValue::Html(h) => ctx.insert(name.as_str(), h.as_str()),
            }
        }
        ctx
    }
}

/// 渲染结果（尚未写盘）
#[derive(Debug, Clone)]
pub(crate) struct RenderedFile {
    pub(crate) name: String,
    pub(crate) contents: String,
}

impl RenderedFile {
    /// 写入目标目录（目录必须已存在），返回写出的路径
    pub(crate) fn write_to(&self, target_dir: &Path) -> Result<PathBuf> {
        ensure_dir(target_dir)?;
        let out_path = target_dir.join(&self.name);
        fs::write(&out_path, self.contents.as_bytes())
            .with_context(|| format!("写出文件失败: {}", out_path.display()))?;
        Ok(out_path)
    }
}

/// 输出目录不存在时报错，不会自动创建
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("输出目录不存在: {}（请先创建该目录）", dir.display());
    }
    Ok(())
}

/// 读取 `template_dir/template_name` 并用变量渲染
pub(crate) fn render_template(
    template_name: &str,
    template_dir: &Path,
    vars: &TemplateVars,
) -> Result<RenderedFile> {
    let src_path = template_dir.join(template_name);
    let source = fs::read_to_string(&src_path)
        .with_context(|| format!("读取模板失败: {}", src_path.display()))?;
    let contents = Tera::one_off(&source, &vars.to_context(), false)
        .with_context(|| format!("渲染模板失败: {}", src_path.display()))?;
    Ok(RenderedFile {
        name: template_name.to_string(),
        contents,
    })
}
