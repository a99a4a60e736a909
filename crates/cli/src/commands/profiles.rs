use crate::args::{ProfileCommands, ProfileNameArgs, ProfileSetArgs, ProfileShowArgs};
use crate::profile_store::{Profile, ProfileStore};

pub fn handle_profiles(
    selected_profile: Option<String>,
    command: ProfileCommands,
) -> anyhow::Result<()> {
    let mut store = ProfileStore::load()?;

    match command {
        ProfileCommands::List => {
            match store.default_profile.as_deref() {
                Some(default) => println!("default_profile: {default}"),
                None => println!("default_profile: <unset>"),
            }

            if store.profiles.is_empty() {
                println!("profiles: <none>");
                return Ok(());
            }

            println!("profiles:");
            for (name, profile) in &store.profiles {
                let endpoint = profile.endpoint.as_deref().unwrap_or("-");
                println!("- {name} ({endpoint})");
            }
        }
        ProfileCommands::Show(ProfileShowArgs { name }) => {
            let name = name
                .or(selected_profile)
                .or_else(|| store.default_profile.clone())
                .ok_or_else(|| {
                    anyhow::anyhow!("no profile selected and default_profile is unset")
                })?;

            let profile = store
                .profiles
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("profile '{name}' not found"))?;
            print_profile(&name, profile);
        }
        ProfileCommands::Set(args) => {
            let name = args.name.clone();
            let make_default = args.default;
            let entry = store.profiles.entry(name.clone()).or_default();
            merge_profile(entry, args);

            if make_default || store.default_profile.is_none() {
                store.default_profile = Some(name.clone());
            }
            store.save()?;
            println!("updated profile: {name}");
        }
        ProfileCommands::Use(ProfileNameArgs { name }) => {
            if !store.profiles.contains_key(&name) {
                anyhow::bail!("profile '{name}' not found (create it via `fabricctl profile set`)");
            }
            store.default_profile = Some(name.clone());
            store.save()?;
            println!("default_profile set to: {name}");
        }
        ProfileCommands::Remove(ProfileNameArgs { name }) => {
            if store.profiles.remove(&name).is_none() {
                anyhow::bail!("profile '{name}' not found");
            }
            if store.default_profile.as_deref() == Some(name.as_str()) {
                store.default_profile = None;
            }
            store.save()?;
            println!("removed profile: {name}");
        }
    }

    Ok(())
}

/// Copies the flags that were given onto `profile`, keeping the rest.
fn merge_profile(profile: &mut Profile, args: ProfileSetArgs) {
    if args.endpoint.is_some() {
        profile.endpoint = args.endpoint;
    }
    if args.ca_cert_path.is_some() {
        profile.ca_cert_path = args.ca_cert_path;
    }
    if args.client_cert_path.is_some() {
        profile.client_cert_path = args.client_cert_path;
    }
    if args.client_key_path.is_some() {
        profile.client_key_path = args.client_key_path;
    }
    if args.token.is_some() {
        profile.token = args.token;
    }
    if args.insecure.is_some() {
        profile.insecure = args.insecure;
    }
    if args.request_timeout_secs.is_some() {
        profile.request_timeout_secs = args.request_timeout_secs;
    }
}

fn print_profile(name: &str, profile: &Profile) {
    println!("name: {name}");
    let paths = [
        ("endpoint", &profile.endpoint),
        ("ca_cert_path", &profile.ca_cert_path),
        ("client_cert_path", &profile.client_cert_path),
        ("client_key_path", &profile.client_key_path),
    ];
    for (key, value) in paths {
        if let Some(value) = value {
            println!("{key}: {value}");
        }
    }
    if let Some(insecure) = profile.insecure {
        println!("insecure: {insecure}");
    }
    if profile.token.is_some() {
        println!("token: <set>");
    }
    if let Some(secs) = profile.request_timeout_secs {
        println!("request_timeout_secs: {secs}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args(name: &str) -> ProfileSetArgs {
        ProfileSetArgs {
            name: name.into(),
            endpoint: None,
            ca_cert_path: None,
            client_cert_path: None,
            client_key_path: None,
            token: None,
            insecure: None,
            request_timeout_secs: None,
            default: false,
        }
    }

    #[test]
    fn merge_keeps_fields_not_given() {
        let mut profile = Profile {
            endpoint: Some("https://a.example:19080".into()),
            token: Some("t".into()),
            ..Default::default()
        };
        let mut args = set_args("prod");
        args.insecure = Some(true);
        merge_profile(&mut profile, args);

        assert_eq!(profile.endpoint.as_deref(), Some("https://a.example:19080"));
        assert_eq!(profile.token.as_deref(), Some("t"));
        assert_eq!(profile.insecure, Some(true));
    }

    #[test]
    fn set_use_and_remove_round_through_the_store() {
        let _guard = crate::test_support::ENV_LOCK.lock().expect("lock");
        let dir = tempfile::tempdir().expect("tempdir");
        // SAFETY: Tests hold ENV_LOCK to serialize env mutations.
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let mut dev = set_args("dev");
        dev.endpoint = Some("http://localhost:19080".into());
        handle_profiles(None, ProfileCommands::Set(dev)).expect("set dev");
        handle_profiles(None, ProfileCommands::Set(set_args("prod"))).expect("set prod");

        let store = ProfileStore::load().expect("load");
        assert_eq!(store.default_profile.as_deref(), Some("dev"));
        assert_eq!(store.profiles.len(), 2);

        handle_profiles(
            None,
            ProfileCommands::Use(ProfileNameArgs {
                name: "prod".into(),
            }),
        )
        .expect("use");
        handle_profiles(
            None,
            ProfileCommands::Remove(ProfileNameArgs {
                name: "prod".into(),
            }),
        )
        .expect("remove");

        let store = ProfileStore::load().expect("load");
        assert!(store.default_profile.is_none());
        assert!(store.profiles.contains_key("dev"));
        assert!(!store.profiles.contains_key("prod"));

        let err = handle_profiles(
            None,
            ProfileCommands::Use(ProfileNameArgs {
                name: "prod".into(),
            }),
        )
        .expect_err("missing");
        assert!(err.to_string().contains("not found"));
    }
}
