use crate::cli::args::{Args, parse_image_type};
use anyhow::Result;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use prism_vm_provision::ProvisionRequest;

/// Values gathered before the pipeline starts.
pub struct Inputs {
    pub host: String,
    pub username: String,
    pub password: String,
    pub request: ProvisionRequest,
}

fn text(theme: &ColorfulTheme, preset: Option<&str>, prompt: &str) -> Result<String> {
    match preset {
        Some(value) => Ok(value.to_string()),
        None => Ok(Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .interact_text()?
            .trim()
            .to_string()),
    }
}

/// Fills every value not given on the command line, in the order
/// address, username, password, container, image name, image type, URL, VM name.
pub fn collect(args: &Args) -> Result<Inputs> {
    let theme = ColorfulTheme::default();

    let host = text(&theme, args.host.as_deref(), "Enter Prism Element IP")?;
    let username = text(&theme, args.username.as_deref(), "Enter Username")?;
    let password = Password::with_theme(&theme)
        .with_prompt("Enter Password")
        .interact()?;
    let container_search = text(
        &theme,
        args.container.as_deref(),
        "Enter Container Search String for Image Upload",
    )?;
    let image_name = text(&theme, args.image_name.as_deref(), "Enter Image Name")?;
    let image_type = match args.image_type {
        Some(image_type) => image_type,
        None => {
            let selection = Input::<String>::with_theme(&theme)
                .with_prompt("Enter Image Type [1 for DISK_IMAGE, 2 for ISO_IMAGE]")
                .validate_with(|input: &String| parse_image_type(input).map(|_| ()))
                .interact_text()?;
            parse_image_type(&selection).map_err(anyhow::Error::msg)?
        }
    };
    let image_url = text(&theme, args.image_url.as_deref(), "Enter URL for the Image")?;
    let vm_name = text(&theme, args.vm_name.as_deref(), "Enter VM Name")?;

    Ok(Inputs {
        host,
        username,
        password,
        request: ProvisionRequest {
            container_search,
            image_name,
            image_type,
            image_url,
            vm_name,
        },
    })
}
