use crate::source::Source;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// README shipped next to the generated packages
pub fn render(source: &dyn Source, website: &str, description: &str) -> String {
    let title = format!("{} for StarDict", source.name());
    let underline = "-".repeat(title.chars().count());

    let mut text = format!(
        "{title}\n\
         {underline}\n\
         \n\
         This is autogenerated dictionary for StarDict.\n\
         \n\
         Data were downloaded from following website:\n\
         <{url}>\n\
         \n\
         The original source is available under {license}.\n\
         \n\
         Dictionary was generated using:\n\
         Stardicter version {VERSION}\n\
         \n\
         You can get conversion script from:\n\
         <{website}>\n\
         \n\
         Install dictionary by copying dictionary files to dic/ folder in\n\
         StarDict. On Linux it is usually /usr/share/stardict/dic/, on Windows\n\
         C:\\Program files\\stardict\\dic\\.\n",
        url = source.url().unwrap_or_default(),
        license = source.license(),
    );

    if !description.is_empty() {
        text.push_str("\nOriginal description of dictionary:\n");
        text.push_str(description);
    }

    text
}
