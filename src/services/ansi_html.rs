//! ANSI SGR 颜色序列转 HTML 片段
//!
//! 转换是全函数：任何输入都产出字符串，无法识别或残缺的转义序列
//! 只会退化为"颜色不变"，不会报错。

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::lookup_color;

lazy_static! {
    /// ESC 后接单个 0x40-0x5F 字节，或完整的 CSI 序列（ESC [ 参数 中间字节 终止字节）
    static ref ANSI_ESCAPE: Regex =
        Regex::new(r"\x1B(?:[@-Z\x5C-_]|\[[0-?]*[ -/]*[@-~])").expect("invalid ANSI escape pattern");
}

/// 按原始顺序切分出的片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// 把输入切分成文本与转义序列交替的片段，不产生空文本片段
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for mat in ANSI_ESCAPE.find_iter(text) {
        if mat.start() > last_end {
            segments.push(Segment::Text(&text[last_end..mat.start()]));
        }
        segments.push(Segment::Escape(mat.as_str()));
        last_end = mat.end();
    }

    if last_end < text.len() {
        segments.push(Segment::Text(&text[last_end..]));
    }

    segments
}

/// 去掉 "ESC [" 前缀和终止字节后的参数串；两字节序列没有参数
fn sgr_parameter(seq: &str) -> Option<&str> {
    seq.get(2..seq.len().checked_sub(1)?)
}

/// 单次转换内的游标状态，不跨调用共享
#[derive(Debug, Default)]
pub struct RenderState {
    active_color: Option<&'static str>,
}

impl RenderState {
    pub fn active_color(&self) -> Option<&'static str> {
        self.active_color
    }

    /// 只有色表中的代码会改变当前颜色。
    /// 其它代码（包括 "0" 复位和多参数序列）保持当前颜色不变。
    pub fn apply_escape(&mut self, seq: &str) {
        if let Some(color) = sgr_parameter(seq).and_then(lookup_color) {
            self.active_color = Some(color);
        }
    }

    pub fn render_text(&self, text: &str, out: &mut String) {
        match self.active_color() {
            Some(color) => {
                out.push_str("<span style=\"color:");
                out.push_str(color);
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</span>");
            }
            None => out.push_str(text),
        }
    }
}

/// 将带 ANSI 颜色的终端输出转换为 HTML 片段
pub fn convert(raw: &str) -> String {
    let mut state = RenderState::default();
    let mut html = String::with_capacity(raw.len());

    for segment in split_segments(raw) {
        match segment {
            Segment::Escape(seq) => state.apply_escape(seq),
            Segment::Text(text) => state.render_text(text, &mut html),
        }
    }

    log::debug!("Converted {} bytes of terminal output into {} bytes of HTML", raw.len(), html.len());
    html
}
