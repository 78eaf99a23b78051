/// SGR 前景色代码与颜色名的对应关系
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    /// SGR 参数，例如 "31"
    pub code: &'static str,
    /// CSS 颜色名，例如 "red"
    pub name: &'static str,
}

/// 固定的 16 色表（标准 8 色 + bright 变体）
pub const COLOR_TABLE: [ColorToken; 16] = [
    ColorToken { code: "30", name: "black" },
    ColorToken { code: "31", name: "red" },
    ColorToken { code: "32", name: "green" },
    ColorToken { code: "33", name: "yellow" },
    ColorToken { code: "34", name: "blue" },
    ColorToken { code: "35", name: "magenta" },
    ColorToken { code: "36", name: "cyan" },
    ColorToken { code: "37", name: "white" },
    ColorToken { code: "90", name: "bright-black" },
    ColorToken { code: "91", name: "bright-red" },
    ColorToken { code: "92", name: "bright-green" },
    ColorToken { code: "93", name: "bright-yellow" },
    ColorToken { code: "94", name: "bright-blue" },
    ColorToken { code: "95", name: "bright-magenta" },
    ColorToken { code: "96", name: "bright-cyan" },
    ColorToken { code: "97", name: "bright-white" },
];

/// 按 SGR 参数查找颜色，未收录的代码（包括 "0" 和多参数序列）返回 None
pub fn lookup_color(code: &str) -> Option<&'static str> {
    COLOR_TABLE
        .iter()
        .find(|token| token.code == code)
        .map(|token| token.name)
}
