//! Static MCCS feature table.
#![allow(missing_docs)]

use crate::features::{
    v, SlValue, SlValues, ValueFormat, VcpFeatureDescriptor,
    VcpFlags as F, SpecGroups as G, Subsets as S,
};

pub const X02_NEW_CONTROL_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "No new control values" },
    SlValue { value: 0x02, name: "One or more new control values have been saved" },
    SlValue { value: 0xff, name: "No user controls are present" },
];

pub const X03_SOFT_CONTROLS_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "No button active" },
    SlValue { value: 0x01, name: "Button 1 active" },
    SlValue { value: 0x02, name: "Button 2 active" },
    SlValue { value: 0x03, name: "Button 3 active" },
    SlValue { value: 0x04, name: "Button 4 active" },
    SlValue { value: 0x05, name: "Button 5 active" },
    SlValue { value: 0x06, name: "Button 6 active" },
    SlValue { value: 0x07, name: "Button 7 active" },
    SlValue { value: 0xff, name: "No user controls are present" },
];

pub const X14_COLOR_PRESET_ABSOLUTE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "sRGB" },
    SlValue { value: 0x02, name: "Display Native" },
    SlValue { value: 0x03, name: "4000 K" },
    SlValue { value: 0x04, name: "5000 K" },
    SlValue { value: 0x05, name: "6500 K" },
    SlValue { value: 0x06, name: "7500 K" },
    SlValue { value: 0x07, name: "8200 K" },
    SlValue { value: 0x08, name: "9300 K" },
    SlValue { value: 0x09, name: "10000 K" },
    SlValue { value: 0x0a, name: "11500 K" },
    SlValue { value: 0x0b, name: "User 1" },
    SlValue { value: 0x0c, name: "User 2" },
    SlValue { value: 0x0d, name: "User 3" },
];

pub const X1E_X1F_AUTO_SETUP_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Auto setup not active" },
    SlValue { value: 0x01, name: "Performing auto setup" },
    SlValue { value: 0x02, name: "Enable continuous/periodic auto setup" },
];

pub const X60_V2_INPUT_SOURCE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "VGA-1" },
    SlValue { value: 0x02, name: "VGA-2" },
    SlValue { value: 0x03, name: "DVI-1" },
    SlValue { value: 0x04, name: "DVI-2" },
    SlValue { value: 0x05, name: "Composite video 1" },
    SlValue { value: 0x06, name: "Composite video 2" },
    SlValue { value: 0x07, name: "S-Video-1" },
    SlValue { value: 0x08, name: "S-Video-2" },
    SlValue { value: 0x09, name: "Tuner-1" },
    SlValue { value: 0x0a, name: "Tuner-2" },
    SlValue { value: 0x0b, name: "Tuner-3" },
    SlValue { value: 0x0c, name: "Component video (YPrPb/YCrCb) 1" },
    SlValue { value: 0x0d, name: "Component video (YPrPb/YCrCb) 2" },
    SlValue { value: 0x0e, name: "Component video (YPrPb/YCrCb) 3" },
    SlValue { value: 0x0f, name: "DisplayPort-1" },
    SlValue { value: 0x10, name: "DisplayPort-2" },
    SlValue { value: 0x11, name: "HDMI-1" },
    SlValue { value: 0x12, name: "HDMI-2" },
];

pub const X63_SPEAKER_SELECT_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Front L/R" },
    SlValue { value: 0x01, name: "Side L/R" },
    SlValue { value: 0x02, name: "Rear L/R" },
    SlValue { value: 0x03, name: "Center/Subwoofer" },
];

pub const X66_AMBIENT_LIGHT_SENSOR_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Disabled" },
    SlValue { value: 0x02, name: "Enabled" },
];

pub const X82_HORIZONTAL_FLIP_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Normal mode" },
    SlValue { value: 0x01, name: "Mirrored horizontally mode" },
];

pub const X84_VERTICAL_FLIP_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Normal mode" },
    SlValue { value: 0x01, name: "Mirrored vertically mode" },
];

pub const X8B_TV_CHANNEL_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Increment channel" },
    SlValue { value: 0x02, name: "Decrement channel" },
];

pub const X8D_TV_AUDIO_MUTE_SOURCE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Mute the audio" },
    SlValue { value: 0x02, name: "Unmute the audio" },
];

pub const X86_DISPLAY_SCALING_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "No scaling" },
    SlValue { value: 0x02, name: "Max image, no aspect ration distortion" },
    SlValue { value: 0x03, name: "Max vertical image, no aspect ratio distortion" },
    SlValue { value: 0x04, name: "Max horizontal image, no aspect ratio distortion" },
    SlValue { value: 0x05, name: "Max vertical image with aspect ratio distortion" },
    SlValue { value: 0x06, name: "Max horizontal image with aspect ratio distortion" },
    SlValue { value: 0x07, name: "Linear expansion (compression) on horizontal axis" },
    SlValue { value: 0x08, name: "Linear expansion (compression) on h and v axes" },
    SlValue { value: 0x09, name: "Squeeze mode" },
    SlValue { value: 0x0a, name: "Non-linear expansion" },
];

pub const X87_SHARPNESS_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Filter function 1" },
    SlValue { value: 0x02, name: "Filter function 2" },
    SlValue { value: 0x03, name: "Filter function 3" },
    SlValue { value: 0x04, name: "Filter function 4" },
];

pub const X94_AUDIO_STEREO_MODE_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Speaker off/Audio not supported" },
    SlValue { value: 0x01, name: "Mono" },
    SlValue { value: 0x02, name: "Stereo" },
    SlValue { value: 0x03, name: "Stereo expanded" },
    SlValue { value: 0x11, name: "SRS 2.0" },
    SlValue { value: 0x12, name: "SRS 2.1" },
    SlValue { value: 0x13, name: "SRS 3.1" },
    SlValue { value: 0x14, name: "SRS 4.1" },
    SlValue { value: 0x15, name: "SRS 5.1" },
    SlValue { value: 0x16, name: "SRS 6.1" },
    SlValue { value: 0x17, name: "SRS 7.1" },
    SlValue { value: 0x21, name: "Dolby 2.0" },
    SlValue { value: 0x22, name: "Dolby 2.1" },
    SlValue { value: 0x23, name: "Dolby 3.1" },
    SlValue { value: 0x24, name: "Dolby 4.1" },
    SlValue { value: 0x25, name: "Dolby 5.1" },
    SlValue { value: 0x26, name: "Dolby 6.1" },
    SlValue { value: 0x27, name: "Dolby 7.1" },
    SlValue { value: 0x31, name: "THX 2.0" },
    SlValue { value: 0x32, name: "THX 2.1" },
    SlValue { value: 0x33, name: "THX 3.1" },
    SlValue { value: 0x34, name: "THX 4.1" },
    SlValue { value: 0x35, name: "THX 5.1" },
    SlValue { value: 0x36, name: "THX 6.1" },
    SlValue { value: 0x37, name: "THX 7.1" },
];

pub const X99_WINDOW_CONTROL_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "No effect" },
    SlValue { value: 0x01, name: "Off" },
    SlValue { value: 0x02, name: "On" },
];

pub const XA2_AUTO_SETUP_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Off" },
    SlValue { value: 0x02, name: "On" },
];

pub const XA5_WINDOW_SELECT_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Full display image area selected except active windows" },
    SlValue { value: 0x01, name: "Window 1 selected" },
    SlValue { value: 0x02, name: "Window 2 selected" },
    SlValue { value: 0x03, name: "Window 3 selected" },
    SlValue { value: 0x04, name: "Window 4 selected" },
    SlValue { value: 0x05, name: "Window 5 selected" },
    SlValue { value: 0x06, name: "Window 6 selected" },
    SlValue { value: 0x07, name: "Window 7 selected" },
];

pub const XAA_SCREEN_ORIENTATION_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "0 degrees" },
    SlValue { value: 0x02, name: "90 degrees" },
    SlValue { value: 0x03, name: "180 degrees" },
    SlValue { value: 0x04, name: "270 degrees" },
    SlValue { value: 0xff, name: "Display cannot supply orientation" },
];

pub const XB0_SETTINGS_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Store current settings in the monitor" },
    SlValue { value: 0x02, name: "Restore factory defaults for current mode" },
];

pub const XB2_FLAT_PANEL_SUBPIXEL_LAYOUT_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Sub-pixel layout not defined" },
    SlValue { value: 0x01, name: "Red/Green/Blue vertical stripe" },
    SlValue { value: 0x02, name: "Red/Green/Blue horizontal stripe" },
    SlValue { value: 0x03, name: "Blue/Green/Red vertical stripe" },
    SlValue { value: 0x04, name: "Blue/Green/Red horizontal stripe" },
    SlValue { value: 0x05, name: "Quad pixel, red at top left" },
    SlValue { value: 0x06, name: "Quad pixel, red at bottom left" },
    SlValue { value: 0x07, name: "Delta (triad)" },
    SlValue { value: 0x08, name: "Mosaic" },
];

pub const XB6_V20_DISPLAY_TECHNOLOGY_TYPE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "CRT (shadow mask)" },
    SlValue { value: 0x02, name: "CRT (aperture grill)" },
    SlValue { value: 0x03, name: "LCD (active matrix)" },
    SlValue { value: 0x04, name: "LCos" },
    SlValue { value: 0x05, name: "Plasma" },
    SlValue { value: 0x06, name: "OLED" },
    SlValue { value: 0x07, name: "EL" },
    SlValue { value: 0x08, name: "MEM" },
];

pub const XB6_DISPLAY_TECHNOLOGY_TYPE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "CRT (shadow mask)" },
    SlValue { value: 0x02, name: "CRT (aperture grill)" },
    SlValue { value: 0x03, name: "LCD (active matrix)" },
    SlValue { value: 0x04, name: "LCos" },
    SlValue { value: 0x05, name: "Plasma" },
    SlValue { value: 0x06, name: "OLED" },
    SlValue { value: 0x07, name: "EL" },
    SlValue { value: 0x08, name: "Dynamic MEM" },
    SlValue { value: 0x09, name: "Static MEM" },
];

pub const XC8_DISPLAY_CONTROLLER_TYPE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Conexant" },
    SlValue { value: 0x02, name: "Genesis" },
    SlValue { value: 0x03, name: "Macronix" },
    SlValue { value: 0x04, name: "IDT" },
    SlValue { value: 0x05, name: "Mstar" },
    SlValue { value: 0x06, name: "Myson" },
    SlValue { value: 0x07, name: "Phillips" },
    SlValue { value: 0x08, name: "PixelWorks" },
    SlValue { value: 0x09, name: "RealTek" },
    SlValue { value: 0x0a, name: "Sage" },
    SlValue { value: 0x0b, name: "Silicon Image" },
    SlValue { value: 0x0c, name: "SmartASIC" },
    SlValue { value: 0x0d, name: "STMicroelectronics" },
    SlValue { value: 0x0e, name: "Topro" },
    SlValue { value: 0x0f, name: "Trumpion" },
    SlValue { value: 0x10, name: "Welltrend" },
    SlValue { value: 0x11, name: "Samsung" },
    SlValue { value: 0x12, name: "Novatek" },
    SlValue { value: 0x13, name: "STK" },
    SlValue { value: 0x14, name: "Silicon Optics" },
    SlValue { value: 0x15, name: "Texas Instruments" },
    SlValue { value: 0x16, name: "Analogix" },
    SlValue { value: 0x17, name: "Quantum Data" },
    SlValue { value: 0x18, name: "NXP Semiconductors" },
    SlValue { value: 0x19, name: "Chrontel" },
    SlValue { value: 0x1a, name: "Parade Technologies" },
    SlValue { value: 0x1b, name: "THine Electronics" },
    SlValue { value: 0x1c, name: "Trident" },
    SlValue { value: 0x1d, name: "Micros" },
    SlValue { value: 0xff, name: "Not defined - a manufacturer designed controller" },
];

pub const XCA_OSD_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "OSD Disabled" },
    SlValue { value: 0x02, name: "OSD Enabled" },
    SlValue { value: 0xff, name: "Display cannot supply this information" },
];

pub const XCA_V22_OSD_BUTTON_SL_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Host OSD control unsupported" },
    SlValue { value: 0x01, name: "OSD disabled, button events enabled" },
    SlValue { value: 0x02, name: "OSD enabled, button events enabled" },
    SlValue { value: 0x03, name: "OSD disabled, button events disabled" },
    SlValue { value: 0xff, name: "Display cannot supply this information" },
];

pub const XCC_OSD_LANGUAGE_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Reserved value, must be ignored" },
    SlValue { value: 0x01, name: "Chinese (traditional, Hantai)" },
    SlValue { value: 0x02, name: "English" },
    SlValue { value: 0x03, name: "French" },
    SlValue { value: 0x04, name: "German" },
    SlValue { value: 0x05, name: "Italian" },
    SlValue { value: 0x06, name: "Japanese" },
    SlValue { value: 0x07, name: "Korean" },
    SlValue { value: 0x08, name: "Portuguese (Portugal)" },
    SlValue { value: 0x09, name: "Russian" },
    SlValue { value: 0x0a, name: "Spanish" },
    SlValue { value: 0x0b, name: "Swedish" },
    SlValue { value: 0x0c, name: "Turkish" },
    SlValue { value: 0x0d, name: "Chinese (simplified / Kantai)" },
    SlValue { value: 0x0e, name: "Portuguese (Brazil)" },
    SlValue { value: 0x0f, name: "Arabic" },
    SlValue { value: 0x10, name: "Bulgarian " },
    SlValue { value: 0x11, name: "Croatian" },
    SlValue { value: 0x12, name: "Czech" },
    SlValue { value: 0x13, name: "Danish" },
    SlValue { value: 0x14, name: "Dutch" },
    SlValue { value: 0x15, name: "Estonian" },
    SlValue { value: 0x16, name: "Finnish" },
    SlValue { value: 0x17, name: "Greek" },
    SlValue { value: 0x18, name: "Hebrew" },
    SlValue { value: 0x19, name: "Hindi" },
    SlValue { value: 0x1a, name: "Hungarian" },
    SlValue { value: 0x1b, name: "Latvian" },
    SlValue { value: 0x1c, name: "Lithuanian" },
    SlValue { value: 0x1d, name: "Norwegian " },
    SlValue { value: 0x1e, name: "Polish" },
    SlValue { value: 0x1f, name: "Romanian " },
    SlValue { value: 0x20, name: "Serbian" },
    SlValue { value: 0x21, name: "Slovak" },
    SlValue { value: 0x22, name: "Slovenian" },
    SlValue { value: 0x23, name: "Thai" },
    SlValue { value: 0x24, name: "Ukranian" },
    SlValue { value: 0x25, name: "Vietnamese" },
];

pub const XD0_V2_OUTPUT_SELECT_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Analog video (R/G/B) 1" },
    SlValue { value: 0x02, name: "Analog video (R/G/B) 2" },
    SlValue { value: 0x03, name: "Digital video (TDMS) 1" },
    SlValue { value: 0x04, name: "Digital video (TDMS) 22" },
    SlValue { value: 0x05, name: "Composite video 1" },
    SlValue { value: 0x06, name: "Composite video 2" },
    SlValue { value: 0x07, name: "S-Video-1" },
    SlValue { value: 0x08, name: "S-Video-2" },
    SlValue { value: 0x09, name: "Tuner-1" },
    SlValue { value: 0x0a, name: "Tuner-2" },
    SlValue { value: 0x0b, name: "Tuner-3" },
    SlValue { value: 0x0c, name: "Component video (YPrPb/YCrCb) 1" },
    SlValue { value: 0x0d, name: "Component video (YPrPb/YCrCb) 2" },
    SlValue { value: 0x0e, name: "Component video (YPrPb/YCrCb) 3" },
    SlValue { value: 0x0f, name: "DisplayPort-1" },
    SlValue { value: 0x10, name: "DisplayPort-2" },
    SlValue { value: 0x11, name: "HDMI-1" },
    SlValue { value: 0x12, name: "HDMI-2" },
];

pub const XD6_POWER_MODE_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "DPM: On,  DPMS: Off" },
    SlValue { value: 0x02, name: "DPM: Off, DPMS: Standby" },
    SlValue { value: 0x03, name: "DPM: Off, DPMS: Suspend" },
    SlValue { value: 0x04, name: "DPM: Off, DPMS: Off" },
    SlValue { value: 0x05, name: "Write only value to turn off display" },
];

pub const XD7_AUX_POWER_OUTPUT_VALUES: SlValues = &[
    SlValue { value: 0x01, name: "Disable auxiliary power" },
    SlValue { value: 0x02, name: "Enable Auxiliary power" },
];

pub const XDA_SCAN_MODE_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Normal operation" },
    SlValue { value: 0x01, name: "Underscan" },
    SlValue { value: 0x02, name: "Overscan" },
    SlValue { value: 0x03, name: "Widescreen" },
];

pub const XDB_IMAGE_MODE_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "No effect" },
    SlValue { value: 0x01, name: "Full mode" },
    SlValue { value: 0x02, name: "Zoom mode" },
    SlValue { value: 0x03, name: "Squeeze mode" },
    SlValue { value: 0x04, name: "Variable" },
];

pub const XDC_DISPLAY_APPLICATION_VALUES: SlValues = &[
    SlValue { value: 0x00, name: "Standard/Default mode" },
    SlValue { value: 0x01, name: "Productivity" },
    SlValue { value: 0x02, name: "Mixed" },
    SlValue { value: 0x03, name: "Movie" },
    SlValue { value: 0x04, name: "User defined" },
    SlValue { value: 0x05, name: "Games" },
    SlValue { value: 0x06, name: "Sports" },
    SlValue { value: 0x07, name: "Professional (all signal processing disabled)" },
    SlValue { value: 0x08, name: "Standard/Default mode with intermediate power consumption" },
    SlValue { value: 0x09, name: "Standard/Default mode with low power consumption" },
    SlValue { value: 0x0a, name: "Demonstration" },
    SlValue { value: 0xf0, name: "Dynamic contrast" },
];

/// Every feature with static metadata, ordered by code.
pub static FEATURES: &[VcpFeatureDescriptor] = &[
    VcpFeatureDescriptor {
        code: 0x01,
        description: "Causes a CRT to perform a degauss cycle",
        spec_groups: G::MISC, subsets: S::CRT,
        v20: v(F::WO.union(F::WO_NC), Some("Degauss"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x02,
        description: "Indicates that a display user control (other than power) has been used to change and save (or autosave) a new value.",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::COMPLEX_NC), Some("New control value"), Some(X02_NEW_CONTROL_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x03,
        description: "Allows display controls to be used as soft keys",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Soft controls"), Some(X03_SOFT_CONTROLS_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x04,
        description: "Restore all factory presets including brightness/contrast, geometry, color, and TV defaults.",
        spec_groups: G::PRESET, subsets: S::COLOR,
        v20: v(F::WO.union(F::WO_NC), Some("Restore factory defaults"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x05,
        description: "Restore factory defaults for brightness and contrast",
        spec_groups: G::PRESET, subsets: S::COLOR,
        v20: v(F::WO.union(F::WO_NC), Some("Restore factory brightness/contrast defaults"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x06,
        description: "Restore factory defaults for geometry adjustments",
        spec_groups: G::PRESET,
        v20: v(F::WO.union(F::WO_NC), Some("Restore factory geometry defaults"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x08,
        description: "Restore factory defaults for color settings.",
        spec_groups: G::PRESET, subsets: S::COLOR,
        v20: v(F::WO.union(F::WO_NC), Some("Restore color defaults"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x0a,
        description: "Restore factory defaults for TV functions.",
        spec_groups: G::PRESET, subsets: S::TV,
        v20: v(F::WO.union(F::WO_NC), Some("Restore factory TV defaults"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x0b,
        description: "Color temperature increment used by feature 0Ch Color Temperature Request",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Color temperature increment"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x0c,
        description: "Specifies a color temperature (degrees Kelvin)",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Color temperature request"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x0e,
        description: "Increase/decrease the sampling clock frequency.",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Clock"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x10,
        description: "Increase/decrease the brightness of the image.",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Brightness"), None),
        v30: v(F::empty(), Some("Luminosity"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x11,
        description: "Select contrast enhancement algorithm respecting flesh tone region",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Flesh tone enhancement"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x12,
        description: "Increase/decrease the contrast of the image.",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Contrast"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x13,
        description: "Increase/decrease the specified backlight control value",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v21: v(F::RW.union(F::COMPLEX_CONT), Some("Backlight control"), None),
        v22: v(F::DEPRECATED.union(F::RW).union(F::COMPLEX_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x14,
        description: "Select a specified color temperature",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Select color preset"), Some(X14_COLOR_PRESET_ABSOLUTE_VALUES)),
        v30: v(F::RW.union(F::COMPLEX_NC), None, None),
        v22: v(F::RW.union(F::COMPLEX_NC), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x16,
        description: "Increase/decrease the luminesence of red pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video gain: Red"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x17,
        description: "Increase/decrease the degree of compensation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("User color vision compensation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x18,
        description: "Increase/decrease the luminesence of green pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video gain: Green"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x1a,
        description: "Increase/decrease the luminesence of blue pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video gain: Blue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x1c,
        description: "Increase/decrease the focus of the image",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Focus"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x1e,
        description: "Perform autosetup function (H/V position, clock, clock phase, A/D converter, etc.",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Auto setup"), Some(X1E_X1F_AUTO_SETUP_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x1f,
        description: "Perform color autosetup function (R/G/B gain and offset, A/D setup, etc. ",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v20: v(F::empty(), None, Some(X1E_X1F_AUTO_SETUP_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Auto color setup"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x20,
        description: "Increasing (decreasing) this value moves the image toward the right (left) of the display.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Position"), None),
        v21: v(F::empty(), Some("Horizontal Position (Phase)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x22,
        description: "Increase/decrease the width of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Size"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x24,
        description: "Increasing (decreasing) this value causes the right and left sides of the image to become more (less) convex.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Pincushion"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x26,
        description: "Increasing (decreasing) this value moves the center section of the image toward the right (left) side of the display.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Pincushion Balance"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x28,
        description: "Increasing (decreasing) this value shifts the red pixels to the right (left) and the blue pixels left (right) across the image with respect to the green pixels.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Convergence"), None),
        v21: v(F::empty(), Some("Horizontal Convergence R/B"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x29,
        description: "Increasing (decreasing) this value shifts the magenta pixels to the right (left) and the green pixels left (right) across the image with respect to the magenta (sic) pixels.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v21: v(F::RW.union(F::STD_CONT), Some("Horizontal Convergence M/G"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x2a,
        description: "Increase/decrease the density of pixels in the image center.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Linearity"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x2c,
        description: "Increasing (decreasing) this value shifts the density of pixels from the left (right) side to the right (left) side of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Linearity Balance"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x2e,
        description: "Gray Scale Expansion",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Gray scale expansion"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x30,
        description: "Increasing (decreasing) this value moves the image toward the top (bottom) edge of the display.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Position"), None),
        v21: v(F::empty(), Some("Vertical Position (Phase)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x32,
        description: "Increase/decreasing the height of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Size"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x34,
        description: "Increasing (decreasing) this value will cause the top and bottom edges of the image to become more (less) convex.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Pincushion"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x36,
        description: "Increasing (decreasing) this value will move the center section of the image toward the top (bottom) edge of the display.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Pincushion Balance"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x38,
        description: "Increasing (decreasing) this value shifts the red pixels up (down) across the image and the blue pixels down (up) across the image with respect to the green pixels.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Convergence"), None),
        v21: v(F::empty(), Some("Vertical Convergence R/B"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x39,
        description: "Increasing (decreasing) this value shifts the magenta pixels up (down) across the image and the green pixels down (up) across the image with respect to the magenta (sic) pixels.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v21: v(F::RW.union(F::STD_CONT), Some("Vertical Convergence M/G"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x3a,
        description: "Increase/decease the density of scan lines in the image center.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Linearity"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x3c,
        description: "Increase/decrease the density of scan lines in the image center.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Linearity Balance"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x3e,
        description: "Increase/decrease the sampling clock phase shift",
        spec_groups: G::IMAGE.union(G::MISC),
        v20: v(F::RW.union(F::STD_CONT), Some("Clock phase"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x40,
        description: "Increasing (decreasing) this value shifts the top section of the image to the right (left) with respect to the bottom section of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Key Balance"), None),
        v21: v(F::empty(), Some("Horizontal Parallelogram"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x41,
        description: "Increasing (decreasing) this value shifts the top section of the image to the right (left) with respect to the bottom section of the image. (sic)",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v21: v(F::RW.union(F::STD_CONT), Some("Vertical Parallelogram"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x42,
        description: "Increasing (decreasing) this value will increase (decrease) the ratio between the horizontal size at the top of the image and the horizontal size at the bottom of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Trapezoid"), None),
        v21: v(F::empty(), Some("Horizontal Keystone"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x43,
        description: "Increasing (decreasing) this value will increase (decrease) the ratio between the vertical size at the left of the image and the vertical size at the right of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Trapezoid"), None),
        v21: v(F::empty(), Some("Vertical Keystone"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x44,
        description: "Increasing (decreasing) this value rotates the image (counter) clockwise around the center point of the screen.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Tilt (rotation)"), None),
        v21: v(F::empty(), Some("Rotation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x46,
        description: "Increase/decrease the distance between the left and right sides at the top of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Top Corner"), None),
        v21: v(F::empty(), Some("Top Corner Flare"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x48,
        description: "Increasing (decreasing) this value moves the top of the image to the right (left).",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Top Corner Balance"), None),
        v21: v(F::empty(), Some("Top Corner Hook"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x4a,
        description: "Increase/decrease the distance between the left and right sides at the bottom of the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Bottom Corner"), None),
        v21: v(F::empty(), Some("Bottom Corner Flare"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x4c,
        description: "Increasing (decreasing) this value moves the bottom end of the image to the right (left).",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Bottom Corner Balance"), None),
        v21: v(F::empty(), Some("Bottom Corner Hook"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x52,
        description: "Read id of one feature that has changed, 0x00 indicates no more",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Active control"), None),
        format: Some(ValueFormat::SlByte),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x54,
        description: "Controls features aimed at preserving display performance",
        spec_groups: G::MISC,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Performance Preservation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x56,
        description: "Increase/decrease horizontal moire cancellation.",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Horizontal Moire"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x58,
        description: "Increase/decrease vertical moire cancellation.",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Vertical Moire"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x59,
        description: "Increase/decrease red saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Red"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x5a,
        description: "Increase/decrease yellow saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Yellow"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x5b,
        description: "Increase/decrease green saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Green"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x5c,
        description: "Increase/decrease cyan saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Cyan"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x5d,
        description: "Increase/decrease blue saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Blue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x5e,
        description: "Increase/decrease magenta saturation",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::STD_CONT), Some("6 axis saturation: Magenta"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x60,
        description: "Selects active video source",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Input Source"), Some(X60_V2_INPUT_SOURCE_VALUES)),
        v30: v(F::RW.union(F::TABLE), None, None),
        v22: v(F::RW.union(F::SIMPLE_NC), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x62,
        description: "Adjusts speaker volume",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::RW.union(F::STD_CONT), Some("Audio speaker volume"), None),
        v30: v(F::RW.union(F::NC_CONT), None, None),
        v22: v(F::RW.union(F::NC_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x63,
        description: "Selects a group of speakers",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::empty(), None, Some(X63_SPEAKER_SELECT_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Speaker Select"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x64,
        description: "Increase/decrease microphone gain",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::RW.union(F::STD_CONT), Some("Audio: Microphone Volume"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x66,
        description: "Enable/Disable ambient light sensor",
        spec_groups: G::MISC,
        v20: v(F::empty(), None, Some(X66_AMBIENT_LIGHT_SENSOR_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Ambient light sensor"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x6b,
        description: "Increase/decrease the white backlight level",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v22: v(F::RW.union(F::STD_CONT), Some("Backlight Level: White"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x6c,
        description: "Increase/decrease the black level of red pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video black level: Red"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x6d,
        description: "Increase/decrease the red backlight level",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v22: v(F::RW.union(F::STD_CONT), Some("Backlight Level: Red"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x6e,
        description: "Increase/decrease the black level of green pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video black level: Green"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x6f,
        description: "Increase/decrease the green backlight level",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v22: v(F::RW.union(F::STD_CONT), Some("Backlight Level: Green"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x70,
        description: "Increase/decrease the black level of blue pixels",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("Video black level: Blue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x71,
        description: "Increase/decrease the blue backlight level",
        spec_groups: G::IMAGE, subsets: S::COLOR.union(S::PROFILE),
        v22: v(F::RW.union(F::STD_CONT), Some("Backlight Level: Blue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x72,
        description: "Select relative or absolute gamma",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Gamma"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x73,
        description: "Provides the size (number of entries and number of bits/entry) for the Red, Green, and Blue LUT in the display.",
        spec_groups: G::MISC.union(G::IMAGE), subsets: S::LUT,
        v20: v(F::RO.union(F::TABLE), Some("LUT Size"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x74,
        description: "Writes a single point within the display's LUT, reads a single point from the LUT",
        spec_groups: G::MISC.union(G::IMAGE), subsets: S::LUT,
        v20: v(F::RW.union(F::TABLE), Some("Single point LUT operation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x75,
        description: "Load (read) multiple values into (from) the display's LUT",
        spec_groups: G::MISC.union(G::IMAGE), subsets: S::LUT,
        v20: v(F::RW.union(F::TABLE), Some("Block LUT operation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x76,
        description: "Initiates a routine resident in the display",
        spec_groups: G::MISC, subsets: S::LUT,
        v20: v(F::WO.union(F::WO_TABLE), Some("Remote Procedure Call"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x78,
        description: "Causes a selected 128 byte block of Display Identification Data (EDID or Display ID) to be read",
        spec_groups: G::MISC,
        v21: v(F::RO.union(F::TABLE), Some("EDID operation"), None),
        v30: v(F::RO.union(F::TABLE), Some("EDID operation"), None),
        v22: v(F::RO.union(F::TABLE), Some("Display Identification Operation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x7a,
        description: "Increase/decrease the distance to the focal plane of the image",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Adjust Focal Plane"), None),
        v30: v(F::DEPRECATED.union(F::RW).union(F::STD_CONT), None, None),
        v22: v(F::DEPRECATED.union(F::RW).union(F::STD_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x7c,
        description: "Increase/decrease the distance to the zoom function of the projection lens (optics)",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::STD_CONT), Some("Adjust Zoom"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x7e,
        description: "Increase/decrease the trapezoid distortion in the image",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Trapezoid"), None),
        v30: v(F::DEPRECATED.union(F::RW).union(F::STD_CONT), None, None),
        v22: v(F::DEPRECATED.union(F::RW).union(F::STD_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x80,
        description: "Increase/decrease the keystone distortion in the image.",
        spec_groups: G::GEOMETRY, subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Keystone"), None),
        v21: v(F::DEPRECATED.union(F::RW).union(F::STD_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x82,
        description: "Flip picture horizontally",
        spec_groups: G::IMAGE.union(G::GEOMETRY),
        v20: v(F::WO.union(F::WO_NC), Some("HorFlip"), Some(X82_HORIZONTAL_FLIP_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Horizontal Mirror (Flip)"), Some(X82_HORIZONTAL_FLIP_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x84,
        description: "Flip picture vertically",
        spec_groups: G::IMAGE.union(G::GEOMETRY),
        v20: v(F::WO.union(F::WO_NC), Some("VertFlip"), Some(X84_VERTICAL_FLIP_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Vertical Mirror (Flip)"), Some(X84_VERTICAL_FLIP_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x86,
        description: "Control the scaling (input vs output) of the display",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Display Scaling"), Some(X86_DISPLAY_SCALING_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x87,
        description: "Selects one of a range of algorithms. Increasing (decreasing) the value must increase (decrease) the edge sharpness of image features.",
        spec_groups: G::IMAGE,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Sharpness"), Some(X87_SHARPNESS_VALUES)),
        v21: v(F::RW.union(F::STD_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x88,
        description: "Increase (decrease) the velocity modulation of the horizontal scan as a function of the change in luminescence level",
        spec_groups: G::MISC.union(G::IMAGE), subsets: S::CRT,
        v20: v(F::RW.union(F::STD_CONT), Some("Velocity Scan Modulation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8a,
        description: "Increase/decrease the amplitude of the color difference components of the video signal",
        spec_groups: G::IMAGE, subsets: S::TV.union(S::COLOR),
        v20: v(F::RW.union(F::STD_CONT), Some("TV Color Saturation"), None),
        v21: v(F::empty(), Some("Color Saturation"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8b,
        description: "Increment (1) or decrement (2) television channel",
        spec_groups: G::MISC, subsets: S::TV,
        v20: v(F::WO.union(F::WO_NC), Some("TV Channel Up/Down"), Some(X8B_TV_CHANNEL_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8c,
        description: "Increase/decrease the amplitude of the high frequency components  of the video signal",
        spec_groups: G::MISC.union(G::IMAGE), subsets: S::TV,
        v20: v(F::RW.union(F::STD_CONT), Some("TV Sharpness"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8d,
        description: "Mute/unmute audio, and (v2.2) screen blank",
        spec_groups: G::MISC, subsets: S::TV.union(S::AUDIO),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Audio Mute"), Some(X8D_TV_AUDIO_MUTE_SOURCE_VALUES)),
        v22: v(F::RW.union(F::COMPLEX_NC), Some("Audio mute/Screen blank"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8e,
        description: "Increase/decrease the ratio between blacks and whites in the image",
        spec_groups: G::MISC, subsets: S::TV,
        v20: v(F::RW.union(F::STD_CONT), Some("TV Contrast"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x8f,
        description: "Emphasize/de-emphasize high frequency audio",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::RW.union(F::STD_CONT), Some("Audio Treble"), None),
        v30: v(F::RW.union(F::NC_CONT), None, None),
        v22: v(F::RW.union(F::NC_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x90,
        description: "Increase/decrease the wavelength of the color component of the video signal. AKA tint.  Applies to currently active interface",
        spec_groups: G::MISC, subsets: S::TV.union(S::COLOR),
        v20: v(F::RW.union(F::STD_CONT), Some("Hue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x91,
        description: "Emphasize/de-emphasize low frequency audio",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::RW.union(F::STD_CONT), Some("Audio Bass"), None),
        v30: v(F::RW.union(F::NC_CONT), None, None),
        v22: v(F::RW.union(F::NC_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x92,
        description: "Increase/decrease the black level of the video",
        spec_groups: G::MISC, subsets: S::TV,
        v20: v(F::RW.union(F::STD_CONT), Some("TV Black level/Brightness"), None),
        v21: v(F::empty(), Some("TV Black level/Luminesence"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x93,
        description: "Controls left/right audio balance",
        spec_groups: G::AUDIO, subsets: S::AUDIO,
        v20: v(F::RW.union(F::STD_CONT), Some("Audio Balance L/R"), None),
        v30: v(F::RW.union(F::NC_CONT), None, None),
        v22: v(F::RW.union(F::NC_CONT), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x94,
        description: "Select audio mode",
        spec_groups: G::AUDIO, subsets: S::TV.union(S::AUDIO),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Audio Stereo Mode"), Some(X94_AUDIO_STEREO_MODE_VALUES)),
        v21: v(F::empty(), Some("Audio Processor Mode"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x95,
        description: "Top left X pixel of an area of the image",
        spec_groups: G::WINDOW.union(G::GEOMETRY), subsets: S::WINDOW,
        v20: v(F::RW.union(F::STD_CONT), Some("Window Position(TL_X)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x96,
        description: "Top left Y pixel of an area of the image",
        spec_groups: G::WINDOW.union(G::GEOMETRY), subsets: S::WINDOW,
        v20: v(F::RW.union(F::STD_CONT), Some("Window Position(TL_Y)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x97,
        description: "Bottom right X pixel of an area of the image",
        spec_groups: G::WINDOW.union(G::GEOMETRY), subsets: S::WINDOW,
        v20: v(F::RW.union(F::STD_CONT), Some("Window Position(BR_X)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x98,
        description: "Bottom right Y pixel of an area of the image",
        spec_groups: G::WINDOW.union(G::GEOMETRY), subsets: S::WINDOW,
        v20: v(F::RW.union(F::STD_CONT), Some("Window Position(BR_Y)"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x99,
        description: "Enables the brightness and color within a window to be different from the desktop.",
        spec_groups: G::WINDOW, subsets: S::WINDOW,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Window control on/off"), Some(X99_WINDOW_CONTROL_VALUES)),
        v30: v(F::DEPRECATED.union(F::RW).union(F::SIMPLE_NC), None, None),
        v22: v(F::DEPRECATED.union(F::RW).union(F::SIMPLE_NC), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9a,
        description: "Changes the contrast ratio between the area of the window and the rest of the desktop",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::WINDOW,
        v20: v(F::RW.union(F::STD_CONT), Some("Window background"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9b,
        description: "Decrease shifts toward magenta, increase shifts toward yellow",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Red"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9c,
        description: "Decrease shifts toward green, increase shifts toward red",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Yellow"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9d,
        description: "Decrease shifts toward yellow, increase shifts toward cyan",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Green"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9e,
        description: "Decrease shifts toward green, increase shifts toward blue",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Cyan"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0x9f,
        description: "Decrease shifts toward cyan, increase shifts toward magenta",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Blue"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xa0,
        description: "Decrease shifts toward blue, 127 no effect, increase shifts toward red",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::COLOR.union(S::PROFILE),
        v20: v(F::RW.union(F::STD_CONT), Some("6 axis hue control: Magenta"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xa2,
        description: "Turn on/off an auto setup function",
        spec_groups: G::IMAGE,
        v20: v(F::WO.union(F::WO_NC), Some("Auto setup on/off"), Some(XA2_AUTO_SETUP_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xa4,
        description: "Turn selected window operation on/off, window mask",
        spec_groups: G::IMAGE, subsets: S::WINDOW,
        v20: v(F::RW.union(F::COMPLEX_NC), Some("Turn the selected window operation on/off"), None),
        v30: v(F::RW.union(F::TABLE), Some("Window mask control"), None),
        v22: v(F::RW.union(F::TABLE), Some("Window mask control"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xa5,
        description: "Change selected window (as defined by 95h..98h)",
        spec_groups: G::IMAGE.union(G::WINDOW), subsets: S::WINDOW,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Change the selected window"), Some(XA5_WINDOW_SELECT_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xaa,
        description: "Indicates screen orientation",
        spec_groups: G::IMAGE.union(G::GEOMETRY),
        v20: v(F::RO.union(F::SIMPLE_NC), Some("Screen Orientation"), Some(XAA_SCREEN_ORIENTATION_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xac,
        description: "Horizontal sync signal frequency as determined by the display",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_CONT), Some("Horizontal frequency"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xae,
        description: "Vertical sync signal frequency as determined by the display, in .01 hz",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_CONT), Some("Vertical frequency"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb0,
        description: "Store/restore the user saved values for the current mode.",
        spec_groups: G::PRESET,
        v20: v(F::WO.union(F::WO_NC), Some("Settings"), Some(XB0_SETTINGS_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb2,
        description: "LCD sub-pixel structure",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::SIMPLE_NC), Some("Flat panel sub-pixel layout"), Some(XB2_FLAT_PANEL_SUBPIXEL_LAYOUT_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb4,
        description: "Indicates timing mode being sent by host",
        spec_groups: G::CONTROL,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Source Timing Mode"), None),
        v30: v(F::RW.union(F::TABLE), None, None),
        v22: v(F::RW.union(F::TABLE), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb6,
        description: "Indicates the base technology type",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::SIMPLE_NC), Some("Display technology type"), Some(XB6_V20_DISPLAY_TECHNOLOGY_TYPE_VALUES)),
        v21: v(F::empty(), None, Some(XB6_DISPLAY_TECHNOLOGY_TYPE_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb7,
        description: "Video mode and status of a DPVL capable monitor",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Monitor status"), None),
        format: Some(ValueFormat::SlByte),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb8,
        description: "Counter for DPVL packets received",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Packet count"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xb9,
        description: "X origin of the monitor in the vertical screen",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Monitor X origin"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xba,
        description: "Y origin of the monitor in the vertical screen",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Monitor Y origin"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xbb,
        description: "Error counter for the DPVL header",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Header error count"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xbc,
        description: "CRC error counter for the DPVL body",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Body CRC error count"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xbd,
        description: "Assigned identification number for the monitor",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_CONT), Some("Client ID"), None),
        format: Some(ValueFormat::Ushort),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xbe,
        description: "Indicates status of the DVI link",
        spec_groups: G::DPVL, subsets: S::DPVL,
        v20: v(F::RW.union(F::COMPLEX_NC), Some("Link control"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc0,
        description: "Active power on time in hours",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_CONT), Some("Display usage time"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc2,
        description: "Length in bytes of non-volatile storage in the display available for writing a display descriptor, max 256",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::STD_CONT), Some("Display descriptor length"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc3,
        description: "Reads (writes) a display descriptor from (to) non-volatile storage in the display.",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::TABLE), Some("Transmit display descriptor"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc4,
        description: "If enabled, the display descriptor shall be displayed when no video is being received.",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::COMPLEX_NC), Some("Enable display of 'display descriptor'"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc6,
        description: "A 2 byte value used to allow an application to only operate with known products.",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Application enable key"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc8,
        description: "Mfg id of controller and 2 byte manufacturer-specific controller type",
        spec_groups: G::MISC.union(G::CONTROL),
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Display controller type"), Some(XC8_DISPLAY_CONTROLLER_TYPE_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xc9,
        description: "2 byte firmware level",
        spec_groups: G::MISC.union(G::CONTROL),
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Display firmware level"), None),
        format: Some(ValueFormat::MccsVersion),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xca,
        description: "Sets and indicates the current operational state of OSD (and buttons in v2.2)",
        spec_groups: G::MISC.union(G::CONTROL),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("OSD"), Some(XCA_OSD_VALUES)),
        v22: v(F::RW.union(F::COMPLEX_NC), Some("OSD/Button Control"), Some(XCA_V22_OSD_BUTTON_SL_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xcc,
        description: "On Screen Display language",
        spec_groups: G::MISC.union(G::CONTROL),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("OSD Language"), Some(XCC_OSD_LANGUAGE_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xcd,
        description: "Control up to 16 LED (or similar) indicators to indicate system status",
        spec_groups: G::MISC,
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Status Indicators"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xce,
        description: "Rows and characters/row of auxiliary display",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("Auxiliary display size"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xcf,
        description: "Sets contents of auxiliary display device",
        spec_groups: G::MISC,
        v20: v(F::WO.union(F::WO_TABLE), Some("Auxiliary display data"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xd0,
        description: "Selects the active output",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Output select"), Some(XD0_V2_OUTPUT_SELECT_VALUES)),
        v30: v(F::RW.union(F::TABLE), None, None),
        v22: v(F::RW.union(F::SIMPLE_NC), None, None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xd2,
        description: "Read an Asset Tag to/from the display",
        spec_groups: G::MISC,
        v21: v(F::RW.union(F::TABLE), Some("Asset Tag"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xd4,
        description: "Stereo video mode",
        spec_groups: G::MISC.union(G::IMAGE),
        v20: v(F::RW.union(F::COMPLEX_NC), Some("Stereo video mode"), None),
        format: Some(ValueFormat::SlByte),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xd6,
        description: "DPM and DPMS status",
        spec_groups: G::MISC.union(G::CONTROL),
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Power mode"), Some(XD6_POWER_MODE_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xd7,
        description: "Controls an auxiliary power output from a display to a host device",
        spec_groups: G::MISC,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Auxiliary power output"), Some(XD7_AUX_POWER_OUTPUT_VALUES)),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xda,
        description: "Controls scan characteristics (aka format)",
        spec_groups: G::GEOMETRY.union(G::IMAGE), subsets: S::CRT,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Scan format"), Some(XDA_SCAN_MODE_VALUES)),
        v21: v(F::empty(), Some("Scan mode"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xdb,
        description: "Controls aspects of the displayed image (TV applications)",
        spec_groups: G::CONTROL, subsets: S::TV,
        v20: v(F::empty(), None, Some(XDB_IMAGE_MODE_VALUES)),
        v21: v(F::RW.union(F::SIMPLE_NC), Some("Image Mode"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xdc,
        description: "Type of application used on display",
        spec_groups: G::IMAGE, subsets: S::COLOR,
        v20: v(F::RW.union(F::SIMPLE_NC), Some("Display Mode"), Some(XDC_DISPLAY_APPLICATION_VALUES)),
        v30: v(F::empty(), Some("Display Application"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xde,
        description: "Operation mode (2.0) or scratch pad (3.0/2.2)",
        spec_groups: G::MISC,
        v20: v(F::WO.union(F::WO_NC), Some("Operation Mode"), None),
        v21: v(F::RW.union(F::COMPLEX_NC), Some("Scratch Pad"), None),
        ..VcpFeatureDescriptor::EMPTY
    },
    VcpFeatureDescriptor {
        code: 0xdf,
        description: "MCCS version",
        spec_groups: G::MISC,
        v20: v(F::RO.union(F::COMPLEX_NC), Some("VCP Version"), None),
        format: Some(ValueFormat::MccsVersion),
        ..VcpFeatureDescriptor::EMPTY
    },
];
