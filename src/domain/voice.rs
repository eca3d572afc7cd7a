//! Voice Registry - 音色注册表
//!
//! voice_id（格式 `speaker_style`，小写下划线连接）到 AivisSpeech Engine
//! 数字 style_id 的静态映射。进程启动时构建一次，之后只读，
//! 所有请求共享同一个快照，无需任何同步。
//!
//! 扩展点：新增音色时在 `VoiceRegistry::builtin()` 的表中追加一行即可，
//! 部署期定制，不提供运行时注册 API。

use std::collections::HashMap;

use thiserror::Error;

/// voice_id 未注册
#[derive(Debug, Error)]
#[error("Unknown voice_id '{0}'. Expected format: 'speaker_style' (e.g., 'kohaku_normal')")]
pub struct UnknownVoice(pub String);

/// 音色条目
///
/// `voice_id` 是对外稳定标识，`style_id` 是引擎内部的数字标识。
/// 两者在注册表内都唯一。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceEntry {
    pub voice_id: &'static str,
    pub speaker_name: &'static str,
    pub style_label: &'static str,
    pub style_id: u32,
}

/// 音色注册表
///
/// 按注册顺序保存全部条目，并维护 voice_id 索引用于精确查找。
pub struct VoiceRegistry {
    entries: Vec<VoiceEntry>,
    index: HashMap<&'static str, usize>,
}

impl VoiceRegistry {
    /// 构建内置音色表
    ///
    /// AivisSpeech Engine 的 Kohaku（4 风格）与 Mao（6 风格）。
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            VoiceEntry {
                voice_id: "kohaku_normal",
                speaker_name: "kohaku",
                style_label: "normal",
                style_id: 1878365376,
            },
            VoiceEntry {
                voice_id: "kohaku_amama",
                speaker_name: "kohaku",
                style_label: "amama",
                style_id: 1878365377,
            },
            VoiceEntry {
                voice_id: "kohaku_setsunane",
                speaker_name: "kohaku",
                style_label: "setsunane",
                style_id: 1878365378,
            },
            VoiceEntry {
                voice_id: "kohaku_nemutai",
                speaker_name: "kohaku",
                style_label: "nemutai",
                style_id: 1878365379,
            },
            VoiceEntry {
                voice_id: "mao_normal",
                speaker_name: "mao",
                style_label: "normal",
                style_id: 888753760,
            },
            VoiceEntry {
                voice_id: "mao_futsuu",
                speaker_name: "mao",
                style_label: "futsuu",
                style_id: 888753761,
            },
            VoiceEntry {
                voice_id: "mao_amama",
                speaker_name: "mao",
                style_label: "amama",
                style_id: 888753762,
            },
            VoiceEntry {
                voice_id: "mao_ochitsuki",
                speaker_name: "mao",
                style_label: "ochitsuki",
                style_id: 888753763,
            },
            VoiceEntry {
                voice_id: "mao_karakai",
                speaker_name: "mao",
                style_label: "karakai",
                style_id: 888753764,
            },
            VoiceEntry {
                voice_id: "mao_setsunane",
                speaker_name: "mao",
                style_label: "setsunane",
                style_id: 888753765,
            },
        ])
    }

    /// 从条目列表构建注册表
    ///
    /// 不变量：voice_id 与 style_id 各自唯一。内置表在测试中校验；
    /// 这里对重复 voice_id 直接 panic，避免索引静默覆盖。
    fn from_entries(entries: Vec<VoiceEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.voice_id, i).is_some() {
                panic!("duplicate voice_id in registry: {}", entry.voice_id);
            }
        }
        Self { entries, index }
    }

    /// 精确查找 voice_id
    ///
    /// 区分大小写，不做模糊匹配，未注册返回 `UnknownVoice`。
    pub fn resolve(&self, voice_id: &str) -> Result<&VoiceEntry, UnknownVoice> {
        self.index
            .get(voice_id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| UnknownVoice(voice_id.to_string()))
    }

    /// 按注册顺序列出全部条目
    pub fn list_voices(&self) -> &[VoiceEntry] {
        &self.entries
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_ten_entries() {
        let registry = VoiceRegistry::builtin();
        assert_eq!(registry.len(), 10);

        let kohaku = registry
            .list_voices()
            .iter()
            .filter(|e| e.speaker_name == "kohaku")
            .count();
        let mao = registry
            .list_voices()
            .iter()
            .filter(|e| e.speaker_name == "mao")
            .count();
        assert_eq!(kohaku, 4);
        assert_eq!(mao, 6);
    }

    #[test]
    fn test_voice_ids_unique() {
        let registry = VoiceRegistry::builtin();
        let ids: HashSet<_> = registry.list_voices().iter().map(|e| e.voice_id).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_style_ids_unique() {
        let registry = VoiceRegistry::builtin();
        let ids: HashSet<_> = registry.list_voices().iter().map(|e| e.style_id).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_resolve_known_voice() {
        let registry = VoiceRegistry::builtin();
        let entry = registry.resolve("kohaku_normal").unwrap();
        assert_eq!(entry.speaker_name, "kohaku");
        assert_eq!(entry.style_label, "normal");
        assert_eq!(entry.style_id, 1878365376);
    }

    #[test]
    fn test_resolve_unknown_voice_never_defaults() {
        let registry = VoiceRegistry::builtin();
        let err = registry.resolve("nonexistent_voice").unwrap_err();
        assert!(err.to_string().contains("nonexistent_voice"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = VoiceRegistry::builtin();
        assert!(registry.resolve("Kohaku_Normal").is_err());
        assert!(registry.resolve("KOHAKU_NORMAL").is_err());
    }

    #[test]
    fn test_resolve_no_prefix_match() {
        let registry = VoiceRegistry::builtin();
        assert!(registry.resolve("kohaku_normal_ja").is_err());
        assert!(registry.resolve("kohaku").is_err());
    }

    #[test]
    fn test_list_voices_preserves_registration_order() {
        let registry = VoiceRegistry::builtin();
        let voices = registry.list_voices();
        assert_eq!(voices[0].voice_id, "kohaku_normal");
        assert_eq!(voices[3].voice_id, "kohaku_nemutai");
        assert_eq!(voices[4].voice_id, "mao_normal");
        assert_eq!(voices[9].voice_id, "mao_setsunane");
    }
}
