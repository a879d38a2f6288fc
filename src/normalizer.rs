//! 入力テキストの正規化
//!
//! - 住所: 連続する空白を1つにまとめ、前後をトリム（キャッシュキーにもなる）
//! - クラブ名: 前後のトリムのみ
//! - ID: クラブ名からURLセーフなスラッグを生成

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// スラッグが空になった場合のID
pub const FALLBACK_SLUG: &str = "club";

/// 住所を正規化する
pub fn normalize_address(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// クラブ名を正規化する（内部の空白は保持）
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// クラブ名からIDを生成する
///
/// 重複は許容する（同名クラブは同じIDになる）。
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// 空セル相当か判定する
///
/// 表計算ソフト経由で欠損値が文字列 "nan" として入ってくることがある。
pub fn is_missing_cell(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("nan")
}
