//! HTML 安全标记模块：
//! - `SafeHtml` 表示已经渲染好的 HTML 片段，写入模板时原样输出
//! - 普通字符串一律经 `escape` 转义后才能变成 `SafeHtml`

use std::fmt;

/// 已转义/已渲染的 HTML 片段
///
/// 只能通过 [`escape`] 或本 crate 内的渲染函数构造，避免未转义内容混入页面。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SafeHtml(String);

impl SafeHtml {
    /// 由可信的、已拼好的标记构造（仅限 crate 内渲染器使用）
    pub(crate) fn from_trusted(markup: String) -> Self {
        SafeHtml(markup)
    }

    /// 用分隔符拼接多个片段，分隔符本身也必须是安全标记
    pub(crate) fn join<I>(parts: I, sep: &str) -> Self
    where
        I: IntoIterator<Item = SafeHtml>,
    {
        let joined: Vec<String> = parts.into_iter().map(|p| p.0).collect();
        SafeHtml(joined.join(sep))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTML 转义，仅处理 & < > " '（`/` 等其余字符原样保留）
pub(crate) fn escape(raw: &str) -> SafeHtml {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    SafeHtml(out)
}
