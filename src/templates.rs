//! Asset Templates - Fixed SVG Producers
//!
//! Every asset body is a compile-time constant. Producers never fail and
//! return the same bytes on every call.

use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Logo,
    Icon,
    Banner,
    Favicon,
}

impl AssetKind {
    /// Emission order.
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Logo,
        AssetKind::Icon,
        AssetKind::Banner,
        AssetKind::Favicon,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Logo => "logo.svg",
            AssetKind::Icon => "icon.svg",
            AssetKind::Banner => "banner.svg",
            AssetKind::Favicon => "favicon.svg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Logo => "Primary logo",
            AssetKind::Icon => "App icon",
            AssetKind::Banner => "Banner",
            AssetKind::Favicon => "Favicon",
        }
    }

    /// Suggested places to use the asset.
    pub fn usage(self) -> &'static str {
        match self {
            AssetKind::Logo => "website, documentation, social media",
            AssetKind::Icon => "application icon, desktop shortcut",
            AssetKind::Banner => "GitHub README, marketing material",
            AssetKind::Favicon => "browser tab, bookmarks",
        }
    }

    /// The `viewBox` extent of the template.
    pub fn view_box(self) -> [u32; 2] {
        match self {
            AssetKind::Logo => [512, 512],
            AssetKind::Icon => [256, 256],
            AssetKind::Banner => [1200, 400],
            AssetKind::Favicon => [256, 256],
        }
    }

    /// The `width`/`height` attributes. Only the favicon differs from its viewBox.
    pub fn render_size(self) -> [u32; 2] {
        match self {
            AssetKind::Favicon => [64, 64],
            other => other.view_box(),
        }
    }

    pub fn render(self) -> &'static str {
        match self {
            AssetKind::Logo => generate_logo(),
            AssetKind::Icon => generate_icon(),
            AssetKind::Banner => generate_banner(),
            AssetKind::Favicon => generate_favicon(),
        }
    }
}

/// One output file: where it goes and what it holds.
#[derive(Debug, Clone)]
pub struct Asset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub body: &'static str,
}

impl Asset {
    pub fn new(kind: AssetKind, output_dir: &Path) -> Self {
        Self {
            kind,
            path: output_dir.join(kind.file_name()),
            body: kind.render(),
        }
    }
}

/// Primary logo, 512x512, with animated sparkles and a rotating ring.
pub fn generate_logo() -> &'static str {
    LOGO_SVG
}

/// Simplified app icon, 256x256.
pub fn generate_icon() -> &'static str {
    ICON_SVG
}

/// Wide banner, 1200x400.
pub fn generate_banner() -> &'static str {
    BANNER_SVG
}

/// Favicon. This is SVG markup drawn on a 256 viewBox and sized to 64px, not
/// an ICO file.
pub fn generate_favicon() -> &'static str {
    FAVICON_SVG
}

const LOGO_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="512" height="512" viewBox="0 0 512 512" xmlns="http://www.w3.org/2000/svg">
  <!-- 背景 -->
  <defs>
    <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#ff6b35;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#f7931a;stop-opacity:1" />
    </linearGradient>
    <linearGradient id="grad2" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#40d4ff;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#00bfff;stop-opacity:1" />
    </linearGradient>
    <filter id="shadow">
      <feDropShadow dx="0" dy="4" stdDeviation="8" flood-opacity="0.3"/>
    </filter>
  </defs>

  <!-- 背景圆 -->
  <circle cx="256" cy="256" r="240" fill="url(#grad1)" opacity="0.15"/>
  
  <!-- 外圆环 -->
  <circle cx="256" cy="256" r="230" fill="none" stroke="url(#grad1)" stroke-width="3" opacity="0.8"/>
  
  <!-- 中心几何形状 - 闪闪发光的钻石 -->
  <g filter="url(#shadow)">
    <!-- 外菱形 -->
    <polygon points="256,80 400,256 256,432 112,256" fill="url(#grad1)" opacity="0.9"/>
    
    <!-- 内菱形 -->
    <polygon points="256,140 340,256 256,372 172,256" fill="url(#grad2)" opacity="0.85"/>
    
    <!-- 中心星形 -->
    <polygon points="256,180 280,240 340,260 280,280 256,340 232,280 172,260 232,240" 
             fill="#ffffff" opacity="0.95"/>
  </g>
  
  <!-- 闪光效果 -->
  <circle cx="220" cy="200" r="8" fill="#ffffff" opacity="0.7">
    <animate attributeName="opacity" values="0.7;0.3;0.7" dur="2s" repeatCount="indefinite"/>
  </circle>
  <circle cx="290" cy="220" r="6" fill="#ffffff" opacity="0.5">
    <animate attributeName="opacity" values="0.5;0.2;0.5" dur="2.5s" repeatCount="indefinite"/>
  </circle>
  
  <!-- 环形动画 -->
  <circle cx="256" cy="256" r="200" fill="none" stroke="url(#grad2)" stroke-width="2" 
          opacity="0.3" stroke-dasharray="5,5">
    <animateTransform attributeName="transform" type="rotate" 
                      from="0 256 256" to="360 256 256" dur="20s" repeatCount="indefinite"/>
  </circle>
  
  <!-- 文字 -->
  <text x="256" y="450" font-family="Arial, sans-serif" font-size="36" font-weight="bold" 
        text-anchor="middle" fill="url(#grad1)">
    TRON VANITY
  </text>
  
  <!-- 副标题 -->
  <text x="256" y="480" font-family="Arial, sans-serif" font-size="12" 
        text-anchor="middle" fill="#666666" letter-spacing="2">
    ADDRESS GENERATOR
  </text>
</svg>"##;

const ICON_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="256" height="256" viewBox="0 0 256 256" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="iconGrad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#ff6b35;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#f7931a;stop-opacity:1" />
    </linearGradient>
    <linearGradient id="iconGrad2" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#40d4ff;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#00bfff;stop-opacity:1" />
    </linearGradient>
  </defs>
  
  <!-- 背景 -->
  <rect width="256" height="256" fill="#f0f0f0" rx="50"/>
  
  <!-- 主菱形 -->
  <polygon points="128,40 200,128 128,216 56,128" fill="url(#iconGrad1)" opacity="0.9"/>
  
  <!-- 内菱形 -->
  <polygon points="128,80 160,128 128,176 96,128" fill="url(#iconGrad2)" opacity="0.85"/>
  
  <!-- 星形中心 -->
  <polygon points="128,100 140,125 165,135 140,145 128,170 116,145 91,135 116,125" 
           fill="#ffffff" opacity="0.9"/>
</svg>"##;

const BANNER_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="1200" height="400" viewBox="0 0 1200 400" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bannerGrad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#ff6b35;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#40d4ff;stop-opacity:1" />
    </linearGradient>
  </defs>
  
  <!-- 背景 -->
  <rect width="1200" height="400" fill="#f9f9f9"/>
  
  <!-- 渐变背景 -->
  <rect width="1200" height="400" fill="url(#bannerGrad)" opacity="0.1"/>
  
  <!-- 左侧Logo -->
  <g transform="translate(100, 50)">
    <polygon points="128,40 200,128 128,216 56,128" fill="#ff6b35" opacity="0.9"/>
    <polygon points="128,80 160,128 128,176 96,128" fill="#40d4ff" opacity="0.85"/>
  </g>
  
  <!-- 文字内容 -->
  <text x="350" y="120" font-family="Arial, sans-serif" font-size="64" font-weight="bold" 
        fill="#ff6b35">
    TRON VANITY
  </text>
  
  <text x="350" y="180" font-family="Arial, sans-serif" font-size="24" fill="#666">
    Professional TRON Address Generator
  </text>
  
  <text x="350" y="250" font-family="Arial, sans-serif" font-size="16" fill="#999">
    Generate beautiful vanity addresses with real-time monitoring
  </text>
  
  <!-- 装饰线 -->
  <line x1="350" y1="270" x2="1100" y2="270" stroke="#ff6b35" stroke-width="2"/>
</svg>"##;

const FAVICON_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="64" height="64" viewBox="0 0 256 256" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="faviconGrad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#ff6b35;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#f7931a;stop-opacity:1" />
    </linearGradient>
    <linearGradient id="faviconGrad2" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#40d4ff;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#00bfff;stop-opacity:1" />
    </linearGradient>
  </defs>
  
  <rect width="256" height="256" fill="#ffffff"/>
  <polygon points="128,30 210,128 128,226 46,128" fill="url(#faviconGrad1)"/>
  <polygon points="128,80 170,128 128,176 86,128" fill="url(#faviconGrad2)"/>
  <circle cx="128" cy="128" r="15" fill="#ffffff"/>
</svg>"##;
