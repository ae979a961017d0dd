//! 按钮渲染模块：把一条 `ButtonRecord` 渲染为 `<a><button>` 片段

use crate::{
    markup::{escape, SafeHtml},
    record::ButtonRecord,
};

pub(crate) const DEFAULT_ICON: &str = "home";
pub(crate) const DEFAULT_URL: &str = "/";

/// 渲染按钮时需要的全局默认值
#[derive(Debug, Clone)]
pub(crate) struct ButtonDefaults {
    /// 鼠标移出后恢复的背景色（按钮未单独指定 color 时）
    pub(crate) button_color: String,
}

/// 渲染单个按钮
pub(crate) fn render_button(rec: &ButtonRecord, defaults: &ButtonDefaults) -> SafeHtml {
    let mut attrs = String::new();

    if rec.has_style() {
        let mut style = String::new();
        if let Some(w) = rec.width {
            style.push_str(&format!("width: {};", w));
        }
        if let Some(fs) = rec.font_size {
            style.push_str(&format!("font-size: {};", fs));
        }
        if let Some(ref c) = rec.color {
            style.push_str(&format!("background-color: {};", c));
        }
        attrs.push_str(&format!(" style=\"{}\"", escape(&style)));
    }

    // :hover 规则写在样式表里无法按按钮区分颜色，这里用鼠标进出事件切换背景色
    if let Some(ref hovered) = rec.hovered_color {
        let rest = rec.color.as_deref().unwrap_or(&defaults.button_color);
        attrs.push_str(&format!(" onmouseenter=\"{}\"", set_background_js(hovered)));
        attrs.push_str(&format!(" onmouseleave=\"{}\"", set_background_js(rest)));
    }

    let url = rec.url.as_deref().unwrap_or(DEFAULT_URL);
    let icon = rec.icon.as_deref().unwrap_or(DEFAULT_ICON);
    let text = rec.text.as_deref().unwrap_or("");

    SafeHtml::from_trusted(format!(
        r#"<a href="{}"><button class="btn"{}> <i class="fa-solid fa-{}"></i> &nbsp; {} </button></a>"#,
        escape(url),
        attrs,
        escape(icon),
        escape(text),
    ))
}

// 颜色先编码为 JS 字符串字面量，再整体做 HTML 属性转义
fn set_background_js(color: &str) -> SafeHtml {
    let literal = serde_json::Value::String(color.to_string()).to_string();
    escape(&format!("this.style.backgroundColor={}", literal))
}
