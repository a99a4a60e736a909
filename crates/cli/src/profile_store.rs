use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fabric_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// Saved connection settings for one cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub ca_cert_path: Option<String>,
    #[serde(default)]
    pub client_cert_path: Option<String>,
    #[serde(default)]
    pub client_key_path: Option<String>,
    #[serde(default)]
    pub insecure: Option<bool>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Profile {
    /// Overwrites the settings this profile pins.
    pub fn apply(&self, cfg: &mut ClientConfig) {
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if self.ca_cert_path.is_some() {
            cfg.ca_cert_path = self.ca_cert_path.clone();
        }
        if self.client_cert_path.is_some() {
            cfg.client_cert_path = self.client_cert_path.clone();
        }
        if self.client_key_path.is_some() {
            cfg.client_key_path = self.client_key_path.clone();
        }
        if let Some(insecure) = self.insecure {
            cfg.tls_insecure_skip_verify = insecure;
        }
        if self.token.is_some() {
            cfg.bearer_token = self.token.clone();
        }
        if let Some(secs) = self.request_timeout_secs {
            cfg.request_timeout_secs = secs;
        }
    }
}

/// Profiles kept in `$XDG_CONFIG_HOME/fabricctl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl ProfileStore {
    pub fn path() -> anyhow::Result<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg).join("fabricctl").join("config.toml"));
        }

        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| anyhow::anyhow!("HOME is not set and XDG_CONFIG_HOME is not set"))?;
        Ok(home.join(".config").join("fabricctl").join("config.toml"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        ensure_private_file(&path)?;
        let raw = fs::read_to_string(&path)?;
        let store = toml::from_str::<Self>(&raw)?;
        Ok(store)
    }

    /// Writes atomically through a temp file in the same directory.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path()?;
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("invalid config path: missing parent dir"))?;
        ensure_private_dir(dir)?;

        let rendered = toml::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        set_private_file_perms(tmp.path())?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path)?;
        Ok(())
    }

    /// The explicitly requested profile, else the default one.
    pub fn resolve(&self, requested: Option<&str>) -> anyhow::Result<Option<(&str, &Profile)>> {
        let Some(name) = requested.or(self.default_profile.as_deref()) else {
            return Ok(None);
        };
        match self.profiles.get_key_value(name) {
            Some((name, profile)) => Ok(Some((name.as_str(), profile))),
            None if requested.is_some() => anyhow::bail!(
                "profile '{name}' not found (create it via `fabricctl profile set`)"
            ),
            // dangling default_profile
            None => Ok(None),
        }
    }
}

fn ensure_private_dir(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

fn set_private_file_perms(path: &Path) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

/// Profiles may hold bearer tokens, so group/world-readable files are refused.
fn ensure_private_file(path: &Path) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path)?.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            anyhow::bail!(
                "profile config is too permissive (mode {:o}); run: chmod 600 {}",
                mode,
                path.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_temp_config_home(dir: &tempfile::TempDir) {
        // SAFETY: Tests hold ENV_LOCK to serialize env mutations.
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
            std::env::remove_var("HOME");
        }
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let _guard = crate::test_support::ENV_LOCK.lock().expect("lock");
        let dir = tempfile::tempdir().expect("tempdir");
        use_temp_config_home(&dir);

        let mut store = ProfileStore {
            default_profile: Some("prod".into()),
            ..Default::default()
        };
        store.profiles.insert(
            "prod".into(),
            Profile {
                endpoint: Some("https://prod.example:19080".into()),
                ca_cert_path: Some("/etc/fabric/ca.pem".into()),
                token: Some("secret".into()),
                ..Default::default()
            },
        );
        store.save().expect("save");

        let loaded = ProfileStore::load().expect("load");
        assert_eq!(loaded.default_profile.as_deref(), Some("prod"));
        assert_eq!(loaded.profiles.get("prod"), store.profiles.get("prod"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(ProfileStore::path().expect("path"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600);
        }
    }

    #[test]
    fn load_returns_default_when_missing() {
        let _guard = crate::test_support::ENV_LOCK.lock().expect("lock");
        let dir = tempfile::tempdir().expect("tempdir");
        use_temp_config_home(&dir);

        let loaded = ProfileStore::load().expect("load");
        assert!(loaded.default_profile.is_none());
        assert!(loaded.profiles.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn load_fails_when_file_is_too_permissive() {
        use std::os::unix::fs::PermissionsExt;

        let _guard = crate::test_support::ENV_LOCK.lock().expect("lock");
        let dir = tempfile::tempdir().expect("tempdir");
        use_temp_config_home(&dir);

        let path = ProfileStore::path().expect("path");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "default_profile = \"prod\"\n").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let err = ProfileStore::load().expect_err("should fail");
        assert!(err.to_string().contains("too permissive"));
    }

    #[test]
    fn resolve_prefers_requested_over_default() {
        let mut store = ProfileStore {
            default_profile: Some("dev".into()),
            ..Default::default()
        };
        store.profiles.insert("dev".into(), Profile::default());
        store.profiles.insert("prod".into(), Profile::default());

        let (name, _) = store.resolve(Some("prod")).expect("resolve").expect("some");
        assert_eq!(name, "prod");
        let (name, _) = store.resolve(None).expect("resolve").expect("some");
        assert_eq!(name, "dev");
        assert!(store.resolve(Some("staging")).is_err());
    }

    #[test]
    fn dangling_default_is_ignored() {
        let store = ProfileStore {
            default_profile: Some("gone".into()),
            ..Default::default()
        };
        assert!(store.resolve(None).expect("resolve").is_none());
    }

    #[test]
    fn profile_overrides_only_pinned_fields() {
        let mut cfg = ClientConfig::new("http://localhost:19080");
        cfg.request_timeout_secs = 30;
        let profile = Profile {
            endpoint: Some("https://prod.example:19080".into()),
            insecure: Some(true),
            ..Default::default()
        };

        profile.apply(&mut cfg);
        assert_eq!(cfg.endpoint, "https://prod.example:19080");
        assert!(cfg.tls_insecure_skip_verify);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.bearer_token.is_none());
    }
}
