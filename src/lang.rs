//! Language detection and comment-syntax table
//!
//! Every scanned file is mapped to a [`Lang`], and every language belongs to a
//! [`LangFamily`] sharing one [`LanguageProfile`]: the comment markers the line
//! classifier recognizes. Supporting a new language is a table addition here,
//! the classifier and matcher stay generic.

use std::path::Path;

/// Single-line block comment markers, e.g. `(*` and `*)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkers {
    pub open: &'static str,
    pub close: &'static str,
}

/// The comment dialect of a language family
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Family name, used in log output
    pub name: &'static str,
    /// Line comment prefixes, longest first
    pub line_prefixes: &'static [&'static str],
    /// Block comment pair, only honored when both markers sit on one line
    pub block: Option<BlockMarkers>,
}

impl LanguageProfile {
    /// Longest registered line prefix that `text` starts with
    pub fn longest_prefix(&self, text: &str) -> Option<&'static str> {
        self.line_prefixes
            .iter()
            .copied()
            .filter(|prefix| text.starts_with(*prefix))
            .max_by_key(|prefix| prefix.len())
    }

    /// Whether `c` is one of the characters the line prefixes are made of
    pub fn is_marker_char(&self, c: char) -> bool {
        self.line_prefixes.iter().any(|prefix| prefix.contains(c))
    }
}

pub static HASH_PROFILE: LanguageProfile = LanguageProfile {
    name: "hash",
    line_prefixes: &["##", "#"],
    block: None,
};

pub static SLASH_PROFILE: LanguageProfile = LanguageProfile {
    name: "slash",
    line_prefixes: &["///", "//"],
    block: Some(BlockMarkers {
        open: "/*",
        close: "*/",
    }),
};

pub static DASH_PROFILE: LanguageProfile = LanguageProfile {
    name: "dash",
    line_prefixes: &["--"],
    block: None,
};

pub static SEMICOLON_PROFILE: LanguageProfile = LanguageProfile {
    name: "semicolon",
    line_prefixes: &[";;", ";"],
    block: None,
};

pub static PERCENT_PROFILE: LanguageProfile = LanguageProfile {
    name: "percent",
    line_prefixes: &["%%", "%"],
    block: None,
};

pub static ML_PROFILE: LanguageProfile = LanguageProfile {
    name: "ml",
    line_prefixes: &[],
    block: Some(BlockMarkers {
        open: "(*",
        close: "*)",
    }),
};

pub static TLA_PROFILE: LanguageProfile = LanguageProfile {
    name: "tla",
    line_prefixes: &["\\*"],
    block: Some(BlockMarkers {
        open: "(*",
        close: "*)",
    }),
};

/// Look up the comment profile for a file extension.
///
/// Unknown extensions return `None`: such files are simply not scanned.
pub fn profile_for(extension: &str) -> Option<&'static LanguageProfile> {
    Lang::from_extension(extension).map(|lang| lang.profile())
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Shell,
    Python,
    Perl,
    Ruby,
    R,
    Tcl,
    Make,
    CMake,
    Dockerfile,
    Yaml,
    Toml,
    C,
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    CSharp,
    Kotlin,
    Swift,
    Scala,
    Dart,
    Lua,
    Haskell,
    Sql,
    Ada,
    Elm,
    OCaml,
    StandardMl,
    Lisp,
    Scheme,
    Clojure,
    EmacsLisp,
    Erlang,
    Tex,
    TlaPlus,
}

impl Lang {
    /// Detect the language of a file from its name alone.
    ///
    /// Conventional file names (`Makefile`, `CMakeLists.txt`) take precedence
    /// over the extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        if let Some(lang) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name)
        {
            return Some(lang);
        }

        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "sh" | "bash" | "zsh" | "ksh" | "fish" => Some(Self::Shell),
            "py" | "pyw" => Some(Self::Python),
            "pl" | "pm" => Some(Self::Perl),
            "rb" => Some(Self::Ruby),
            "r" => Some(Self::R),
            "tcl" => Some(Self::Tcl),
            "mk" | "mak" => Some(Self::Make),
            "cmake" => Some(Self::CMake),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "c" | "h" => Some(Self::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            "cs" => Some(Self::CSharp),
            "kt" | "kts" => Some(Self::Kotlin),
            "swift" => Some(Self::Swift),
            "scala" | "sc" => Some(Self::Scala),
            "dart" => Some(Self::Dart),
            "lua" => Some(Self::Lua),
            "hs" => Some(Self::Haskell),
            "sql" => Some(Self::Sql),
            "adb" | "ads" => Some(Self::Ada),
            "elm" => Some(Self::Elm),
            "ml" | "mli" => Some(Self::OCaml),
            "sml" | "sig" => Some(Self::StandardMl),
            "lisp" | "lsp" | "cl" => Some(Self::Lisp),
            "scm" | "ss" => Some(Self::Scheme),
            "clj" | "cljs" | "cljc" | "edn" => Some(Self::Clojure),
            "el" => Some(Self::EmacsLisp),
            "erl" | "hrl" => Some(Self::Erlang),
            "tex" | "sty" => Some(Self::Tex),
            "tla" => Some(Self::TlaPlus),
            _ => None,
        }
    }

    /// Detect language from a conventional, usually extension-less, file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "Makefile" | "makefile" | "GNUmakefile" => Some(Self::Make),
            "CMakeLists.txt" => Some(Self::CMake),
            "Dockerfile" | "Containerfile" => Some(Self::Dockerfile),
            "Rakefile" | "Gemfile" => Some(Self::Ruby),
            _ => None,
        }
    }

    /// Detect language from a `#!` interpreter line.
    ///
    /// `#!/usr/bin/env python3` and `#!/bin/python3.11` both resolve to
    /// Python: the interpreter's version suffix is ignored.
    pub fn from_shebang(first_line: &str) -> Option<Self> {
        let command = first_line.strip_prefix("#!")?.trim();
        let mut words = command.split_whitespace();
        let mut interpreter = basename(words.next()?);
        if interpreter == "env" {
            interpreter = basename(words.find(|w| !w.starts_with('-'))?);
        }

        let name = interpreter.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
        match name {
            "sh" | "bash" | "zsh" | "ksh" | "dash" | "fish" => Some(Self::Shell),
            "python" => Some(Self::Python),
            "perl" => Some(Self::Perl),
            "ruby" => Some(Self::Ruby),
            "Rscript" => Some(Self::R),
            "tclsh" | "wish" => Some(Self::Tcl),
            "make" => Some(Self::Make),
            "lua" | "luajit" => Some(Self::Lua),
            "runhaskell" | "runghc" => Some(Self::Haskell),
            "ocaml" => Some(Self::OCaml),
            "node" | "deno" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Python => "python",
            Self::Perl => "perl",
            Self::Ruby => "ruby",
            Self::R => "r",
            Self::Tcl => "tcl",
            Self::Make => "make",
            Self::CMake => "cmake",
            Self::Dockerfile => "dockerfile",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::CSharp => "csharp",
            Self::Kotlin => "kotlin",
            Self::Swift => "swift",
            Self::Scala => "scala",
            Self::Dart => "dart",
            Self::Lua => "lua",
            Self::Haskell => "haskell",
            Self::Sql => "sql",
            Self::Ada => "ada",
            Self::Elm => "elm",
            Self::OCaml => "ocaml",
            Self::StandardMl => "sml",
            Self::Lisp => "lisp",
            Self::Scheme => "scheme",
            Self::Clojure => "clojure",
            Self::EmacsLisp => "emacs-lisp",
            Self::Erlang => "erlang",
            Self::Tex => "tex",
            Self::TlaPlus => "tla+",
        }
    }

    /// Get the comment family of this language
    pub fn family(&self) -> LangFamily {
        match self {
            Self::Shell
            | Self::Python
            | Self::Perl
            | Self::Ruby
            | Self::R
            | Self::Tcl
            | Self::Make
            | Self::CMake
            | Self::Dockerfile
            | Self::Yaml
            | Self::Toml => LangFamily::Hash,
            Self::C
            | Self::Cpp
            | Self::Java
            | Self::JavaScript
            | Self::TypeScript
            | Self::Go
            | Self::Rust
            | Self::CSharp
            | Self::Kotlin
            | Self::Swift
            | Self::Scala
            | Self::Dart => LangFamily::Slash,
            Self::Lua | Self::Haskell | Self::Sql | Self::Ada | Self::Elm => LangFamily::Dash,
            Self::OCaml | Self::StandardMl => LangFamily::Ml,
            Self::Lisp | Self::Scheme | Self::Clojure | Self::EmacsLisp => LangFamily::Semicolon,
            Self::Erlang | Self::Tex => LangFamily::Percent,
            Self::TlaPlus => LangFamily::Tla,
        }
    }

    /// Comment profile used to scan files of this language
    pub fn profile(&self) -> &'static LanguageProfile {
        self.family().profile()
    }
}

/// Language families sharing one comment syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangFamily {
    /// `#` comments: shells, Python, Perl, Ruby, Make, YAML
    Hash,
    /// `//` and single-line `/* */`: C, Java, JavaScript, Go, Rust
    Slash,
    /// `--` comments: Lua, Haskell, SQL, Ada
    Dash,
    /// Single-line `(* *)` only: OCaml, Standard ML
    Ml,
    /// `;` comments: Lisp dialects
    Semicolon,
    /// `%` comments: Erlang, TeX
    Percent,
    /// `\*` and single-line `(* *)`: TLA+
    Tla,
}

impl LangFamily {
    /// Get the comment profile of the family
    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Self::Hash => &HASH_PROFILE,
            Self::Slash => &SLASH_PROFILE,
            Self::Dash => &DASH_PROFILE,
            Self::Ml => &ML_PROFILE,
            Self::Semicolon => &SEMICOLON_PROFILE,
            Self::Percent => &PERCENT_PROFILE,
            Self::Tla => &TLA_PROFILE,
        }
    }
}

fn basename(command: &str) -> &str {
    command.rsplit('/').next().unwrap_or(command)
}
