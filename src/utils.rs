use anyhow::Result;
use std::fs;

/// Drop root privileges once input devices are open.
pub fn drop_privileges() -> Result<()> {
    let uid = nix::unistd::getuid();
    let gid = nix::unistd::getgid();

    if nix::unistd::geteuid().is_root() {
        nix::unistd::setgid(gid)?;
        nix::unistd::setuid(uid)?;

        // Verify we can't regain root
        if nix::unistd::setuid(nix::unistd::Uid::from_raw(0)).is_ok() {
            return Err(anyhow::anyhow!("failed to fully drop root privileges"));
        }

        log::info!("Dropped root privileges");
    }

    Ok(())
}

/// Check if the binary has the setuid bit set.
pub fn check_setuid() -> bool {
    if let Ok(current_exe) = std::env::current_exe() {
        if let Ok(metadata) = fs::metadata(&current_exe) {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let mode = metadata.permissions().mode();
                return (mode & 0o4000) != 0;
            }
        }
    }
    false
}

/// Print help for the usual cause of capture failure: no read access
/// to /dev/input.
pub fn print_permission_help() {
    eprintln!("keyshow needs read access to /dev/input to capture keystrokes.");
    eprintln!();
    eprintln!("You have several options:");
    eprintln!("  1. Add yourself to the input group (recommended):");
    eprintln!("     sudo usermod -a -G input $USER");
    eprintln!("     # Then log out and back in");
    eprintln!();
    eprintln!("  2. Run with sudo:");
    eprintln!("     sudo keyshow");
    eprintln!();
    eprintln!("  3. Set the setuid bit:");
    eprintln!("     sudo chown root:root /path/to/keyshow");
    eprintln!("     sudo chmod u+s /path/to/keyshow");
}
