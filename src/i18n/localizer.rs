//! 翻訳の適用

use super::TranslationMap;
use crate::page::Localizable;

/// ローカライズキーを持つ要素に翻訳を適用する
///
/// キーが辞書に存在し、値が空でない要素だけテキストを置き換える。
/// それ以外の要素は変更しない。
///
/// # Returns
/// テキストを書き換えた要素の数
pub fn apply_i18n<'a, E, I>(translations: &TranslationMap, elements: I) -> usize
where
    E: Localizable + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    let mut applied = 0;

    for element in elements {
        let value = element
            .i18n_key()
            .filter(|key| !key.is_empty())
            .and_then(|key| translations.get(key))
            .filter(|value| !value.is_empty());

        if let Some(value) = value {
            element.set_text(value);
            applied += 1;
        }
    }

    tracing::debug!("Applied {} translations", applied);
    applied
}
