//! # Multiwfn 定量分子表面分析输出解析器
//!
//! 解析 Multiwfn 主功能 12 (quantitative molecular surface analysis) 的文本输出。
//!
//! 报告为散文式的统计行，顺序不固定、任意子集可能缺失。每个统计量由一条
//! 独立的正则表达式提取（只取第一个匹配），彼此之间没有顺序依赖：
//! 某条模式不匹配只会让对应字段为 `None`，不会影响其他字段，也不视为错误。
//!
//! ## 输出片段
//! ```text
//!  Volume:   1150.69216 Bohr^3  (  170.51474 Angstrom^3)
//!  Estimated density according to mass and volume (M/V):    1.0166 g/cm^3
//!  Minimal value:   -37.70451 kcal/mol   Maximal value:    39.31127 kcal/mol
//!  Overall surface area:         612.35047 Bohr^2  (  171.47919 Angstrom^2)
//!  Nonpolar surface area (|ESP| <= 10 kcal/mol):     97.10 Angstrom^2  ( 56.77 %)
//!  Polar surface area (|ESP| > 10 kcal/mol):         73.94 Angstrom^2  ( 43.23 %)
//!  Global surface minimum: -0.027510 a.u. at  -0.225417   0.366873  -1.831106 Ang
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/analyze/esp.rs` 使用
//! - 使用 `models/surface.rs`
//! - 使用 `regex` crate

use crate::models::surface::{
    Area, EspRange, EspStatistics, PolarityPartition, Skewness, SurfaceAreas, SurfaceMinimum,
    Volume,
};
use crate::models::SurfaceAnalysisResult;
use regex::Regex;
use std::sync::LazyLock;

/// 数值片段：可选符号、小数、可选指数
const NUM: &str = r"([-+]?\d*\.?\d+(?:[Ee][-+]?\d+)?)";

/// 编译模式，`{NUM}` 替换为数值捕获组
fn pattern(body: &str) -> Regex {
    Regex::new(&body.replace("{NUM}", NUM)).expect("static surface-analysis pattern")
}

static VOLUME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Volume:\s+{NUM}\s+Bohr\^3\s+\(\s*{NUM}\s+Angstrom\^3\)"));

static DENSITY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Estimated density.*?{NUM}\s+g/cm\^3"));

static ESP_MIN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Minimal value:\s+{NUM}\s+kcal/mol"));

static ESP_MAX: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Maximal value:\s+{NUM}\s+kcal/mol"));

static POLARITY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"Nonpolar surface area.*?{NUM}\s+Angstrom\^2\s+\(\s*{NUM}\s*%\)\s+",
        r"Polar surface area.*?{NUM}\s+Angstrom\^2\s+\(\s*{NUM}",
    ))
});

static GLOBAL_MINIMUM: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"Global surface minimum:\s+{NUM}\s+a\.u\.\s+at\s+{NUM}\s+{NUM}\s+{NUM}\s+Ang")
});

type AreaField = fn(&mut SurfaceAreas) -> &mut Option<Area>;
type StatField = fn(&mut EspStatistics) -> &mut Option<f64>;
type SkewField = fn(&mut Skewness) -> &mut Option<f64>;

static AREA_PATTERNS: LazyLock<Vec<(AreaField, Regex)>> = LazyLock::new(|| {
    let table: [(AreaField, &str); 3] = [
        (|a| &mut a.total, "Overall"),
        (|a| &mut a.positive, "Positive"),
        (|a| &mut a.negative, "Negative"),
    ];
    table
        .into_iter()
        .map(|(field, label)| {
            let body = format!(
                r"{} surface area:\s+{{NUM}}\s+Bohr\^2\s+\(\s*{{NUM}}\s+Angstrom\^2\)",
                label
            );
            (field, pattern(&body))
        })
        .collect()
});

static STAT_PATTERNS: LazyLock<Vec<(StatField, Regex)>> = LazyLock::new(|| {
    let table: [(StatField, &str); 9] = [
        (|s| &mut s.overall_avg, r"Overall average value:\s+{NUM}\s+a\.u\."),
        (|s| &mut s.positive_avg, r"Positive average value:\s+{NUM}\s+a\.u\."),
        (|s| &mut s.negative_avg, r"Negative average value:\s+{NUM}\s+a\.u\."),
        (|s| &mut s.total_variance, r"Overall variance.*?:\s+{NUM}\s+a\.u\.\^2"),
        (|s| &mut s.positive_variance, r"Positive variance:\s+{NUM}\s+a\.u\.\^2"),
        (|s| &mut s.negative_variance, r"Negative variance:\s+{NUM}\s+a\.u\.\^2"),
        (|s| &mut s.charge_balance, r"Balance of charges \(nu\):\s+{NUM}"),
        (
            |s| &mut s.internal_separation,
            r"Internal charge separation \(Pi\):\s+{NUM}\s+a\.u\.",
        ),
        (
            |s| &mut s.molecular_polarity,
            r"Molecular polarity index \(MPI\):\s+{NUM}\s+eV",
        ),
    ];
    table
        .into_iter()
        .map(|(field, body)| (field, pattern(body)))
        .collect()
});

static SKEW_PATTERNS: LazyLock<Vec<(SkewField, Regex)>> = LazyLock::new(|| {
    let table: [(SkewField, &str); 3] = [
        (|s| &mut s.overall, r"Overall skewness:\s+{NUM}"),
        (|s| &mut s.positive, r"Positive skewness:\s+{NUM}"),
        (|s| &mut s.negative, r"Negative skewness:\s+{NUM}"),
    ];
    table
        .into_iter()
        .map(|(field, body)| (field, pattern(body)))
        .collect()
});

/// 解析定量分子表面分析报告
pub fn parse_surface_analysis(text: &str) -> SurfaceAnalysisResult {
    let mut areas = SurfaceAreas::default();
    for (field, re) in AREA_PATTERNS.iter() {
        *field(&mut areas) = capture::<2>(re, text).map(|[bohr2, angstrom2]| Area {
            bohr2,
            angstrom2,
        });
    }

    let mut stats = EspStatistics::default();
    for (field, re) in STAT_PATTERNS.iter() {
        *field(&mut stats) = capture::<1>(re, text).map(|[v]| v);
    }

    let mut skewness = Skewness::default();
    for (field, re) in SKEW_PATTERNS.iter() {
        *field(&mut skewness) = capture::<1>(re, text).map(|[v]| v);
    }

    let esp_range = EspRange {
        min_kcal_mol: capture::<1>(&ESP_MIN, text).map(|[v]| v),
        max_kcal_mol: capture::<1>(&ESP_MAX, text).map(|[v]| v),
    };

    SurfaceAnalysisResult {
        volume: capture::<2>(&VOLUME, text).map(|[bohr3, angstrom3]| Volume { bohr3, angstrom3 }),
        density: capture::<1>(&DENSITY, text).map(|[v]| v),
        esp_range: non_empty(esp_range),
        surface_area: non_empty(areas),
        esp_stats: non_empty(stats),
        polarity: capture::<4>(&POLARITY, text).map(|[na, np, pa, pp]| PolarityPartition {
            nonpolar_area: na,
            nonpolar_percent: np,
            polar_area: pa,
            polar_percent: pp,
        }),
        skewness: non_empty(skewness),
        global_minimum: capture::<4>(&GLOBAL_MINIMUM, text).map(|[value, x, y, z]| {
            SurfaceMinimum {
                value_au: value,
                position: [x, y, z],
            }
        }),
    }
}

/// 取第一个匹配的 N 个捕获组，任一组无法解析为数值时视为未匹配
fn capture<const N: usize>(re: &Regex, text: &str) -> Option<[f64; N]> {
    let caps = re.captures(text)?;
    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        let raw = caps.get(i + 1)?.as_str();
        *value = match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                log::debug!("multiwfn: cannot parse '{}' as a number", raw);
                return None;
            }
        };
    }
    Some(values)
}

/// 全部字段缺失的分组折叠为 `None`
fn non_empty<T: Default + PartialEq>(group: T) -> Option<T> {
    if group == T::default() {
        None
    } else {
        Some(group)
    }
}
