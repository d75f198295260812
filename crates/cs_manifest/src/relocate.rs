//! Moving files from a game variant into `Core`.

use std::fs;
use std::path::{Path, PathBuf};

use cs_rules::{Variant, MANIFEST_FILE_NAME};

use crate::error::{RelocateError, Result};
use crate::manifest::{EntryEdit, StagedEdit};

/// Where the variants live on disk.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Code root of `variant`, e.g. `<root>/GeneralsMD/Code`.
    pub fn variant_dir(&self, variant: Variant) -> PathBuf {
        variant
            .components()
            .iter()
            .fold(self.root.clone(), |dir, c| dir.join(c))
    }

    /// Absolute path of a `/`-separated file path inside `variant`.
    pub fn file(&self, variant: Variant, rel: &str) -> PathBuf {
        rel.split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .fold(self.variant_dir(variant), |dir, c| dir.join(c))
    }

    /// The `CMakeLists.txt` of a top-level project folder inside `variant`.
    pub fn manifest(&self, variant: Variant, folder: &str) -> PathBuf {
        self.variant_dir(variant).join(folder).join(MANIFEST_FILE_NAME)
    }
}

/// A variant-relative file path split at its first `/`.
///
/// `GameEngine/Include/Common/crc.h` → folder `GameEngine`, entry
/// `Include/Common/crc.h` (the text listed in `GameEngine/CMakeLists.txt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    pub full: String,
    pub folder: String,
    pub entry: String,
}

impl EntryPath {
    pub fn parse(path: &str) -> Result<Self> {
        match path.find('/') {
            Some(idx) if idx > 0 => Ok(Self {
                full: path.to_string(),
                folder: path[..idx].to_string(),
                entry: path[idx + 1..].to_string(),
            }),
            _ => Err(RelocateError::NoProjectFolder(path.to_string())),
        }
    }
}

/// Unify a file that exists in both games into `Core`.
///
/// The entry is commented out in both game manifests and uncommented in the
/// `Core` manifest, the counterpart game's copy is deleted and `from`'s copy
/// is moved to `Core`. Both copies and all three manifests are read and
/// checked before the first write.
pub fn unify_file(
    layout: &Layout,
    from: Variant,
    from_file: &str,
    to: Variant,
    to_file: &str,
) -> Result<()> {
    ensure_core(to)?;
    let counterpart = from.opposite().ok_or(RelocateError::NoCounterpart(from))?;
    let src = EntryPath::parse(from_file)?;
    let dst = EntryPath::parse(to_file)?;
    let source = layout.file(from, &src.full);
    let stale = layout.file(counterpart, &src.full);
    ensure_exists(&source)?;
    ensure_exists(&stale)?;

    let edits = [
        StagedEdit::stage(
            &layout.manifest(counterpart, &src.folder),
            &src.entry,
            EntryEdit::Disable,
        )?,
        StagedEdit::stage(&layout.manifest(from, &src.folder), &src.entry, EntryEdit::Disable)?,
        StagedEdit::stage(&layout.manifest(to, &dst.folder), &dst.entry, EntryEdit::Enable)?,
    ];

    tracing::info!("unify {from}/{from_file} -> {to}/{to_file}");

    for edit in edits {
        edit.commit()?;
    }
    fs::remove_file(&stale).map_err(RelocateError::io(&stale))?;
    move_file(&source, &layout.file(to, &dst.full))
}

/// Move a file that exists in only one game into `Core`.
pub fn unify_move_file(
    layout: &Layout,
    from: Variant,
    from_file: &str,
    to: Variant,
    to_file: &str,
) -> Result<()> {
    ensure_core(to)?;
    let src = EntryPath::parse(from_file)?;
    let dst = EntryPath::parse(to_file)?;
    let source = layout.file(from, &src.full);
    ensure_exists(&source)?;

    let edits = [
        StagedEdit::stage(&layout.manifest(from, &src.folder), &src.entry, EntryEdit::Disable)?,
        StagedEdit::stage(&layout.manifest(to, &dst.folder), &dst.entry, EntryEdit::Enable)?,
    ];

    tracing::info!("move {from}/{from_file} -> {to}/{to_file}");

    for edit in edits {
        edit.commit()?;
    }
    move_file(&source, &layout.file(to, &dst.full))
}

fn ensure_core(to: Variant) -> Result<()> {
    if to == Variant::Core {
        Ok(())
    } else {
        Err(RelocateError::DestinationNotCore(to))
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RelocateError::MissingSource(path.to_path_buf()))
    }
}

/// Move `from` to `to`, creating parent directories. Falls back to
/// copy-and-delete when a rename is not possible (e.g. across devices).
fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(RelocateError::io(parent))?;
    }
    if fs::rename(from, to).is_err() {
        fs::copy(from, to).map_err(RelocateError::io(to))?;
        fs::remove_file(from).map_err(RelocateError::io(from))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC_H: &str = "GameEngine/Include/Common/crc.h";

    fn write(path: &Path, text: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn game_manifest() -> &'static str {
        "set(SRC\n    Include/Common/crc.h\n    Include/Common/Other.h\n)\n"
    }

    fn setup() -> (tempfile::TempDir, Layout) {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());
        for game in [Variant::Generals, Variant::ZeroHour] {
            write(&layout.manifest(game, "GameEngine"), game_manifest());
            write(&layout.file(game, CRC_H), &format!("// {game}\n"));
        }
        write(
            &layout.manifest(Variant::Core, "GameEngine"),
            "set(SRC\n#    Include/Common/crc.h\n)\n",
        );
        (tmp, layout)
    }

    #[test]
    fn layout_paths() {
        let layout = Layout::new("/repo");
        assert_eq!(
            layout.variant_dir(Variant::ZeroHour),
            Path::new("/repo/GeneralsMD/Code")
        );
        assert_eq!(layout.variant_dir(Variant::Core), Path::new("/repo/Core"));
        assert_eq!(
            layout.manifest(Variant::Generals, "GameEngine"),
            Path::new("/repo/Generals/Code/GameEngine/CMakeLists.txt")
        );
        assert_eq!(
            layout.file(Variant::Core, "Lib/./a.h"),
            Path::new("/repo/Core/Lib/a.h")
        );
    }

    #[test]
    fn entry_path_split() {
        let p = EntryPath::parse(CRC_H).unwrap();
        assert_eq!(p.folder, "GameEngine");
        assert_eq!(p.entry, "Include/Common/crc.h");
        assert!(matches!(
            EntryPath::parse("/abs.h"),
            Err(RelocateError::NoProjectFolder(_))
        ));
        assert!(matches!(
            EntryPath::parse("flat.h"),
            Err(RelocateError::NoProjectFolder(_))
        ));
    }

    #[test]
    fn unify_updates_all_manifests_and_files() {
        let (_tmp, layout) = setup();

        unify_file(&layout, Variant::ZeroHour, CRC_H, Variant::Core, CRC_H).unwrap();

        for game in [Variant::Generals, Variant::ZeroHour] {
            let manifest = read(&layout.manifest(game, "GameEngine"));
            assert!(manifest.contains("#    Include/Common/crc.h\n"));
            assert!(manifest.contains("\n    Include/Common/Other.h\n"));
            assert!(!layout.file(game, CRC_H).exists());
        }
        assert_eq!(
            read(&layout.manifest(Variant::Core, "GameEngine")),
            "set(SRC\n    Include/Common/crc.h\n)\n"
        );
        assert_eq!(read(&layout.file(Variant::Core, CRC_H)), "// GeneralsMD\n");
    }

    #[test]
    fn move_leaves_counterpart_alone() {
        let (_tmp, layout) = setup();

        unify_move_file(&layout, Variant::Generals, CRC_H, Variant::Core, CRC_H).unwrap();

        assert!(read(&layout.manifest(Variant::Generals, "GameEngine"))
            .contains("#    Include/Common/crc.h\n"));
        assert_eq!(
            read(&layout.manifest(Variant::ZeroHour, "GameEngine")),
            game_manifest()
        );
        assert!(layout.file(Variant::ZeroHour, CRC_H).exists());
        assert_eq!(read(&layout.file(Variant::Core, CRC_H)), "// Generals\n");
    }

    #[test]
    fn non_core_destination_touches_nothing() {
        let (_tmp, layout) = setup();

        let err = unify_file(&layout, Variant::ZeroHour, CRC_H, Variant::Generals, CRC_H)
            .unwrap_err();
        assert!(matches!(err, RelocateError::DestinationNotCore(Variant::Generals)));
        assert_eq!(
            read(&layout.manifest(Variant::ZeroHour, "GameEngine")),
            game_manifest()
        );
        assert!(layout.file(Variant::ZeroHour, CRC_H).exists());
    }

    #[test]
    fn core_has_no_counterpart() {
        let (_tmp, layout) = setup();
        let err = unify_file(&layout, Variant::Core, CRC_H, Variant::Core, CRC_H).unwrap_err();
        assert!(matches!(err, RelocateError::NoCounterpart(Variant::Core)));
    }

    #[test]
    fn missing_source_is_reported_before_edits() {
        let (_tmp, layout) = setup();
        let missing = "GameEngine/Include/Common/Gone.h";
        let err = unify_move_file(&layout, Variant::ZeroHour, missing, Variant::Core, missing)
            .unwrap_err();
        assert!(matches!(err, RelocateError::MissingSource(_)));
        assert_eq!(
            read(&layout.manifest(Variant::ZeroHour, "GameEngine")),
            game_manifest()
        );
    }

    #[test]
    fn destination_may_use_a_different_path() {
        let (_tmp, layout) = setup();
        let dst = "GameEngine/Include/Common/CRC.h";

        unify_move_file(&layout, Variant::ZeroHour, CRC_H, Variant::Core, dst).unwrap();

        assert!(layout.file(Variant::Core, dst).exists());
        assert!(!layout.file(Variant::ZeroHour, CRC_H).exists());
    }

    fn manifests(layout: &Layout) -> Vec<String> {
        [Variant::Generals, Variant::ZeroHour, Variant::Core]
            .into_iter()
            .map(|v| read(&layout.manifest(v, "GameEngine")))
            .collect()
    }

    #[test]
    fn missing_counterpart_copy_touches_nothing() {
        let (_tmp, layout) = setup();
        fs::remove_file(layout.file(Variant::Generals, CRC_H)).unwrap();
        let before = manifests(&layout);

        let err = unify_file(&layout, Variant::ZeroHour, CRC_H, Variant::Core, CRC_H).unwrap_err();
        assert!(matches!(err, RelocateError::MissingSource(_)));
        assert_eq!(manifests(&layout), before);
        assert!(layout.file(Variant::ZeroHour, CRC_H).exists());
        assert!(!layout.file(Variant::Core, CRC_H).exists());
    }

    #[test]
    fn missing_core_manifest_touches_nothing() {
        let (_tmp, layout) = setup();
        fs::remove_file(layout.manifest(Variant::Core, "GameEngine")).unwrap();

        let err = unify_move_file(&layout, Variant::ZeroHour, CRC_H, Variant::Core, CRC_H)
            .unwrap_err();
        assert!(matches!(err, RelocateError::Io { .. }));
        assert_eq!(
            read(&layout.manifest(Variant::ZeroHour, "GameEngine")),
            game_manifest()
        );
        assert!(layout.file(Variant::ZeroHour, CRC_H).exists());

        let err = unify_file(&layout, Variant::ZeroHour, CRC_H, Variant::Core, CRC_H).unwrap_err();
        assert!(matches!(err, RelocateError::Io { .. }));
        for game in [Variant::Generals, Variant::ZeroHour] {
            assert_eq!(read(&layout.manifest(game, "GameEngine")), game_manifest());
            assert!(layout.file(game, CRC_H).exists());
        }
    }

    #[test]
    fn non_ascii_manifest_touches_nothing() {
        let (_tmp, layout) = setup();
        let core_manifest = layout.manifest(Variant::Core, "GameEngine");
        fs::write(&core_manifest, "# \u{a9} EA\n#    Include/Common/crc.h\n").unwrap();

        let err = unify_file(&layout, Variant::Generals, CRC_H, Variant::Core, CRC_H).unwrap_err();
        assert!(matches!(err, RelocateError::NonAsciiManifest(_)));
        for game in [Variant::Generals, Variant::ZeroHour] {
            assert_eq!(read(&layout.manifest(game, "GameEngine")), game_manifest());
        }
    }
}
