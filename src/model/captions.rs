//! Caption shapes

use super::enums::*;

model! {
    /// Caption Description
    pub struct CaptionDescription {
        /// Specifies which input caption selector to use as a caption source.
        "CaptionSelectorName" caption_selector_name: string,
        "DestinationSettings" destination_settings: nested(CaptionDestinationSettings),
        /// ISO 639-2 three-digit code.
        "LanguageCode" language_code: string,
        "LanguageDescription" language_description: string,
        /// Name of the caption description. Outputs reference it by name.
        "Name" name: string,
    }
}

model! {
    /// Caption Destination Settings
    pub struct CaptionDestinationSettings {
        "BurnInDestinationSettings" burn_in_destination_settings: nested(BurnInDestinationSettings),
    }
}

model! {
    /// Burn In Destination Settings
    pub struct BurnInDestinationSettings {
        "Alignment" alignment: enumeration(BurnInAlignment),
        "BackgroundColor" background_color: enumeration(BurnInBackgroundColor),
        /// Specifies the opacity of the background rectangle. 255 is opaque; 0 is transparent.
        "BackgroundOpacity" background_opacity: int,
        /// External font file used for caption burn-in.
        "Font" font: nested(InputLocation),
        "FontColor" font_color: enumeration(BurnInFontColor),
        "FontOpacity" font_opacity: int,
        /// Font resolution in DPI (dots per inch); default is 96 dpi.
        "FontResolution" font_resolution: int,
        /// When set to 'auto' fontSize will scale depending on the size of the output.
        "FontSize" font_size: string,
        "OutlineColor" outline_color: enumeration(BurnInOutlineColor),
        "OutlineSize" outline_size: int,
        "ShadowColor" shadow_color: enumeration(BurnInShadowColor),
        "ShadowOpacity" shadow_opacity: int,
        "ShadowXOffset" shadow_x_offset: int,
        "ShadowYOffset" shadow_y_offset: int,
        "TeletextGridControl" teletext_grid_control: enumeration(BurnInTeletextGridControl),
        "XPosition" x_position: int,
        "YPosition" y_position: int,
    }
}

model! {
    /// Input Location
    pub struct InputLocation {
        /// key used to extract the password from EC2 Parameter store
        "PasswordParam" password_param: string,
        "Uri" uri: string,
        "Username" username: string,
    }
}
