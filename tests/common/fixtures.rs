//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// ヘッダと実装を持つ最小の mu 形式モジュール
pub fn mu_header(guard: &str, major: u32, minor: u32, patch: u32) -> String {
    let prefix = guard.trim_end_matches("_H");
    format!(
        "#ifndef {guard}\n#define {guard}\n\
         #define {prefix}_VERSION_MAJOR {major}\n\
         #define {prefix}_VERSION_MINOR {minor}\n\
         #define {prefix}_VERSION_PATCH {patch}\n\
         int {lower}_api(void);\n#endif\n",
        lower = prefix.to_ascii_lowercase()
    )
}

pub fn mu_implementation(guard: &str, version: &str) -> String {
    let lower = guard.trim_end_matches("_H").to_ascii_lowercase();
    format!("int {lower}_api(void) {{ return 0; }} /* {version} */\n")
}

/// カタログと C ソースを置く一時ワークスペース
#[allow(dead_code)]
pub struct CatalogWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl CatalogWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// ファイルを作成
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let full = self.path(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        full
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// モジュール `dir/name.h` と `dir/name.c` を作成
    pub fn module(&self, dir: &str, guard: &str, version: (u32, u32, u32)) {
        let name = guard.trim_end_matches("_H").to_ascii_lowercase();
        let (major, minor, patch) = version;
        self.write(&format!("{dir}/{name}.h"), &mu_header(guard, major, minor, patch));
        self.write(
            &format!("{dir}/{name}.c"),
            &mu_implementation(guard, &format!("{major}.{minor}.{patch}")),
        );
    }

    /// MUX 1.0.0 を直接埋め込み、MUZ が自前の MUX 1.1.0 を埋め込むカタログ
    pub fn diverging(&self) -> PathBuf {
        self.module("mux-1.0", "MUX_H", (1, 0, 0));
        self.module("mux-1.1", "MUX_H", (1, 1, 0));
        self.module("muz", "MUZ_H", (1, 0, 0));
        self.module("muy", "MUY_H", (2, 1, 0));
        self.write(
            "muembed.yaml",
            "modules:\n\
             \x20 - header: mux-1.0/mux.h\n\
             \x20   implementation: mux-1.0/mux.c\n\
             \x20 - header: mux-1.1/mux.h\n\
             \x20   implementation: mux-1.1/mux.c\n\
             \x20 - header: muz/muz.h\n\
             \x20   implementation: muz/muz.c\n\
             \x20   embeds: [\"MUX_H@1.1.0\"]\n\
             \x20 - header: muy/muy.h\n\
             \x20   implementation: muy/muy.c\n\
             \x20   embeds: [\"MUX_H@1.0.0\"]\n\
             targets:\n\
             \x20 - name: clean\n\
             \x20   output: out/clean.h\n\
             \x20   embeds: [\"MUX_H@1.0.0\", \"MUY_H\"]\n\
             \x20 - name: diverging\n\
             \x20   output: out/diverging.h\n\
             \x20   embeds: [\"MUX_H@1.0.0\", \"MUZ_H\"]\n",
        )
    }

    /// MUA と MUB が互いを埋め込むカタログ
    pub fn cyclic(&self) -> PathBuf {
        self.write(
            "cycle.json",
            r#"{
                "modules": [
                    { "guard": "MUA_H", "version": "1.0.0", "header_text": "a", "embeds": ["MUB_H"] },
                    { "guard": "MUB_H", "version": "1.0.0", "header_text": "b", "embeds": ["MUA_H"] }
                ],
                "targets": [ { "name": "loop", "output": "loop.h", "embeds": ["MUA_H"] } ]
            }"#,
        )
    }
}
