//! 网格排版：按每行最多 N 个按钮分组，行内换行拼接，行间插入 `<br/>`

use std::num::NonZeroUsize;

use crate::{
    markup::SafeHtml,
    record::ButtonRecord,
    render::{render_button, ButtonDefaults},
};

const BUTTON_SEP: &str = "\n";
const LINE_SEP: &str = "<br/>";

/// 按顺序切分为若干行，最后一行可能不满
pub(crate) fn lines(records: &[ButtonRecord], per_line: NonZeroUsize) -> impl Iterator<Item = &[ButtonRecord]> {
    records.chunks(per_line.get())
}

/// 渲染整个按钮网格
pub(crate) fn render_grid(
    records: &[ButtonRecord],
    per_line: NonZeroUsize,
    defaults: &ButtonDefaults,
) -> SafeHtml {
    let rows = lines(records, per_line).map(|line| {
        SafeHtml::join(line.iter().map(|rec| render_button(rec, defaults)), BUTTON_SEP)
    });
    SafeHtml::join(rows, LINE_SEP)
}
