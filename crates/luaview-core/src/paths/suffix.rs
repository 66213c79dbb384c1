//! File-role suffixes and filename helpers.
//!
//! Classification is an exact, case-sensitive match on the end of the name.
//! No case folding, no separator stripping.

/// Packaged script bundle.
pub const POSTFIX_SCRIPT_BUNDLE: &str = ".lvbundle";
/// Default cache file postfix.
pub const POSTFIX_DEFAULT: &str = ".lv";
/// Encrypted Lua script.
pub const POSTFIX_LV: &str = ".lv";
/// Plain Lua script.
pub const POSTFIX_LUA: &str = ".lua";
/// Bundle signature.
pub const POSTFIX_SIGN: &str = ".sign";
pub const POSTFIX_JPG: &str = ".jpg";
pub const POSTFIX_PNG: &str = ".png";
pub const POSTFIX_APK: &str = ".apk";
pub const POSTFIX_LOG: &str = ".log";

/// Role of a cached file, derived from its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `.lvbundle`
    ScriptBundle,
    /// `.lv`
    EncryptedScript,
    /// `.lua`
    Script,
    /// `.sign`
    Signature,
    Jpg,
    Png,
    Apk,
    Log,
}

impl ArtifactKind {
    /// Every kind, in classification order.
    pub const ALL: [Self; 8] = [
        Self::ScriptBundle,
        Self::EncryptedScript,
        Self::Script,
        Self::Signature,
        Self::Jpg,
        Self::Png,
        Self::Apk,
        Self::Log,
    ];

    /// The suffix (with leading dot) that identifies this kind.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::ScriptBundle => POSTFIX_SCRIPT_BUNDLE,
            Self::EncryptedScript => POSTFIX_LV,
            Self::Script => POSTFIX_LUA,
            Self::Signature => POSTFIX_SIGN,
            Self::Jpg => POSTFIX_JPG,
            Self::Png => POSTFIX_PNG,
            Self::Apk => POSTFIX_APK,
            Self::Log => POSTFIX_LOG,
        }
    }

    /// Classify a file name by its suffix.
    ///
    /// Suffixes never overlap (`.lv` does not match `.lvbundle`), so at most
    /// one kind applies.
    pub fn classify(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| file_name.ends_with(kind.suffix()))
    }
}

/// Join a stem and a dotted extension. No validation is applied.
pub fn build_file_name(name_without_extension: &str, dot_extension: &str) -> String {
    format!("{name_without_extension}{dot_extension}")
}

/// Whether `file_name` is a packaged script bundle.
pub fn is_lua_script_bundle(file_name: &str) -> bool {
    file_name.ends_with(POSTFIX_SCRIPT_BUNDLE)
}

/// Whether `file_name` is an encrypted Lua script.
pub fn is_lua_encrypt_script(file_name: &str) -> bool {
    file_name.ends_with(POSTFIX_LV)
}

/// Whether `file_name` is a plain Lua script.
pub fn is_lua_script(file_name: &str) -> bool {
    file_name.ends_with(POSTFIX_LUA)
}

/// Whether `file_name` is a signature file.
pub fn is_lua_sign_file(file_name: &str) -> bool {
    file_name.ends_with(POSTFIX_SIGN)
}

/// Replace everything from the last `.` with `new_suffix`.
///
/// Names without a `.` are returned unchanged; the suffix is not appended.
pub fn change_suffix(file_name: &str, new_suffix: &str) -> String {
    let Some(dot) = file_name.rfind('.') else {
        return file_name.to_string();
    };
    format!("{}{new_suffix}", &file_name[..dot])
}
