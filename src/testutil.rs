//! On-disk fixture trees shared by the unit tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::name::NamePolicy;
use crate::tree::{CommandTree, DRIVER_NAME};

pub(crate) fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    chmod(path, 0o755);
}

pub(crate) fn chmod(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// Build the standard fixture tree under `base` and open it.
///
/// ```text
/// myapp/
///   _driver
///   hasdriver/
///     _driver
///     subcommand
///     dashed-command
///   hasdriver2/
///     _driver
///   nodriver/
///     subcommand
///   hasbaddriver/
///     _driver        (not executable)
/// ```
pub(crate) fn fixture_tree(base: &Path) -> CommandTree {
    let root = fixture_root(base);
    CommandTree::new(root, NamePolicy::default()).unwrap()
}

pub(crate) fn fixture_root(base: &Path) -> PathBuf {
    let root = base.join("myapp");
    fs::create_dir(&root).unwrap();
    write_script(&root.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n");

    let hasdriver = root.join("hasdriver");
    fs::create_dir(&hasdriver).unwrap();
    write_script(&hasdriver.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n");
    write_script(&hasdriver.join("subcommand"), "#!/bin/sh\nexit 0\n");
    write_script(&hasdriver.join("dashed-command"), "#!/bin/sh\nexit 0\n");

    let hasdriver2 = root.join("hasdriver2");
    fs::create_dir(&hasdriver2).unwrap();
    write_script(&hasdriver2.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n");

    let nodriver = root.join("nodriver");
    fs::create_dir(&nodriver).unwrap();
    write_script(&nodriver.join("subcommand"), "#!/bin/sh\nexit 0\n");

    let hasbaddriver = root.join("hasbaddriver");
    fs::create_dir(&hasbaddriver).unwrap();
    fs::write(hasbaddriver.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n").unwrap();
    chmod(&hasbaddriver.join(DRIVER_NAME), 0o644);

    root
}
