use crate::config::{Config, RemoteConfig};
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::store::mirror;
use crate::ui::messages::{success, warning};
use tracing::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the local CSV mirrors, with their header row
///
/// The remote store is not contacted; missing credentials are only reported.
pub fn handle(cfg: &Config) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURAZIONE
    //
    let path = cfg.save()?;

    println!("⚙️  Initializing rInternLog…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir    : {}", cfg.data_path().display());

    //
    // 2️⃣ MIRROR LOCALI
    //
    for kind in [RecordKind::Attendance, RecordKind::Diary] {
        let mirror_path = cfg.mirror_path(kind);
        if mirror::ensure(&mirror_path, kind)? {
            info!(kind = kind.as_str(), path = %mirror_path.display(), "created local mirror");
            println!("✅ Created {}", mirror_path.display());
        } else {
            println!("✅ Kept    {}", mirror_path.display());
        }
    }

    //
    // 3️⃣ CREDENZIALI (solo verifica)
    //
    if let Err(e) = RemoteConfig::resolve(&Config::secrets_file()) {
        warning(format!(
            "{e}. Set it in {} or in a .env file before recording.",
            Config::secrets_file().display()
        ));
    }

    success("rInternLog initialization completed!");
    Ok(())
}
