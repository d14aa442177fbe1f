//! Built-in trait categories, writing styles and word-limit presets.

/// A named group of built-in trait labels.
#[derive(Debug, Clone, Copy)]
pub struct TraitCategory {
    pub name: &'static str,
    pub traits: &'static [&'static str],
}

/// A built-in writing style.
#[derive(Debug, Clone, Copy)]
pub struct StyleOption {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const DEFAULT_WORD_LIMIT: u32 = 150;

pub const WORD_LIMIT_PRESETS: [u32; 6] = [50, 100, 150, 200, 250, 300];

pub const TRAIT_CATEGORIES: &[TraitCategory] = &[
    TraitCategory {
        name: "學習態度",
        traits: &["認真負責", "專注投入", "積極發問", "好奇心強", "自動自發", "按時完成作業"],
    },
    TraitCategory {
        name: "人際互動",
        traits: &["樂於助人", "友善有禮", "善於合作", "懂得分享", "富同理心", "具領導力"],
    },
    TraitCategory {
        name: "品格表現",
        traits: &["誠實守信", "勇於認錯", "堅持不懈", "有禮貌", "守規矩", "惜物愛物"],
    },
    TraitCategory {
        name: "才藝特長",
        traits: &["熱愛閱讀", "擅長運動", "富有創意", "音樂天分", "美術才華", "表達流暢"],
    },
    TraitCategory {
        name: "待加強",
        traits: &["上課易分心", "作業常遲交", "需要更多自信", "情緒管理待加強", "字跡可再工整"],
    },
];

pub const STYLE_OPTIONS: &[StyleOption] = &[
    StyleOption {
        name: "溫馨感性",
        description: "語氣溫柔，著重情感連結",
        example: "看著你一天天成長，老師心裡滿是感動。",
    },
    StyleOption {
        name: "幽默風趣",
        description: "輕鬆俏皮，帶點玩笑",
        example: "你的笑話讓整間教室都亮了起來！",
    },
    StyleOption {
        name: "正式典雅",
        description: "用詞端正，適合正式文件",
        example: "本學期學習態度認真，表現可圈可點。",
    },
    StyleOption {
        name: "勵志鼓舞",
        description: "強調潛能與未來目標",
        example: "相信自己，你的未來充滿無限可能！",
    },
    StyleOption {
        name: "詩意文藝",
        description: "運用譬喻與意象",
        example: "你像一顆安靜發芽的種子，正悄悄長成大樹。",
    },
];

/// Iterate every built-in trait label in category order.
pub fn builtin_traits() -> impl Iterator<Item = &'static str> {
    TRAIT_CATEGORIES.iter().flat_map(|category| category.traits.iter().copied())
}

pub fn is_builtin_trait(label: &str) -> bool {
    builtin_traits().any(|builtin| builtin == label)
}

pub fn is_builtin_style(label: &str) -> bool {
    STYLE_OPTIONS.iter().any(|style| style.name == label)
}
