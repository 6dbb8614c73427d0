//! Constants used throughout stamp

/// Template configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["stamp.yaml", "stamp.yml", "stamp.json"];

/// Ignore file name
pub const IGNORE_FILE: &str = ".stampignore";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Author used when no git `user.name` can be found
pub const FALLBACK_AUTHOR: &str = "Anonymous";

/// Format of the `%date%` token; `%year%` is its first four characters
pub const DATE_FORMAT: &str = "%Y/%m/%d";
pub const YEAR_FORMAT: &str = "%Y";

/// Entry names that are never collected, wherever they appear in the tree
pub const DEFAULT_DENY: &[&str] = &[
    "build",
    "Build",
    "vs_example.sln",
    ".idea",
    ".gradle",
    ".DS_Store",
    "captures",
    ".externalNativeBuild",
    ".cxx",
    "local.properties",
    "MacApp.xcworkspace",
    "MacExample.xcodeproj",
    "IosApp.xcworkspace",
];

/// Dotfiles kept as placeholders even though their stem is empty
pub const DEFAULT_KEEP: &[&str] = &[".gitkeep"];

/// Extensions copied byte-for-byte without substitution
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] =
    &["ico", "png", "jpg", "jpeg", "gif", "bmp", "icns"];

/// Extensions that receive executable permission after writing
pub const DEFAULT_EXECUTABLE_EXTENSIONS: &[&str] = &["sh"];

/// Answer validation
pub mod validation {
    pub const NAME_PATTERN: &str = r"^[a-z][_a-z]*[a-z]+$";
    pub const INVALID_NAME: &str = "Please input a valid library name";
    pub const INVALID_OUTPUT_DIR: &str = "Please input a valid output directory";
}

/// Prompt messages
pub mod prompts {
    pub const NAME: &str = "Please input library name";
    pub const OUTPUT_DIR: &str = "Please input output directory";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
