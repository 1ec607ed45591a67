//! Static footer content: copyright, disclaimer and citations.

use chrono::{Datelike, Utc};
use serde::Serialize;

pub const PRODUCT_NAME: &str = "EPT Productivity Calculator";

pub const DISCLAIMER: &str = "The outputs calculated herein are not claims or guarantees, \
forecasts, or results. This study is a derivative of hundreds of studies which contribute \
to the canon \"Law of UIUX\" - Doherty's Threshold.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub text: &'static str,
    pub url: Option<&'static str>,
}

pub const CITATIONS: [Citation; 7] = [
    Citation {
        text: "IBM 1982, The Economic Value of Rapid Response Time",
        url: Some("https://www.researchgate.net/publication/202165676_The_Economic_Value_of_Rapid_Response_Time"),
    },
    Citation {
        text: "Myers, Brad. (1985). The importance of percent-done progress indicators for computer-human interfaces. ACM SIGCHI Bulletin. 16. 11-17.",
        url: None,
    },
    Citation {
        text: "Miller, Lawrence. (1977). A Study in Man-Machine Interaction. AFIPS Natl Comput Conf Expo Conf Proc. 46. 409-421.",
        url: None,
    },
    Citation {
        text: "Weisberg, David. (1984). The Impact of Network System Architecture on CAD/CAM Productivity. Computer Graphics and Applications, IEEE. 4. 36-40.",
        url: None,
    },
    Citation {
        text: "Spence, Robert. (1993). Human factors in interactive graphics. Computer-Aided Design. 25. 671-676.",
        url: None,
    },
    Citation {
        text: "Rashid, Richard & Robertson, George. (1981). Accent: A Communication Oriented Network Operating System Kernel. Proc. Eighth ACM Symp. Operating Systems Principles. 64-75.",
        url: None,
    },
    Citation {
        text: "Miller, Robert. (1968). Response time in man-computer conversational transactions.",
        url: Some("https://yusufarslan.net/sites/yusufarslan.net/files/upload/content/Miller1968.pdf"),
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {PRODUCT_NAME}. MIT License.")
}

/// Everything the footer shows, stamped with the current year.
#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub copyright: String,
    pub disclaimer: &'static str,
    pub citations: &'static [Citation],
}

impl Footer {
    pub fn for_year(year: i32) -> Self {
        Self {
            copyright: copyright_line(year),
            disclaimer: DISCLAIMER,
            citations: &CITATIONS,
        }
    }

    pub fn current() -> Self {
        Self::for_year(Utc::now().year())
    }
}
