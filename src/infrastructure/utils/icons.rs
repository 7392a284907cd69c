use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Abstract icon identifiers; views turn them into `data-icon` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    // platforms
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Globe,
    // skills
    React,
    Vue,
    Angular,
    Html,
    Css,
    JavaScript,
    Sass,
    Node,
    Python,
    Java,
    Php,
    Laravel,
    Database,
    Redis,
    Graphql,
    Django,
    Spring,
    Flask,
    Git,
    Docker,
    Aws,
    Linux,
    Npm,
    Windows,
    Apple,
    Android,
    Code,
    // ui
    Briefcase,
    AcademicCap,
    Sun,
    Moon,
    Menu,
    Close,
    Terminal,
    Mail,
    Phone,
}

impl IconId {
    pub fn name(self) -> &'static str {
        match self {
            IconId::Github => "github",
            IconId::Linkedin => "linkedin",
            IconId::Twitter => "twitter",
            IconId::Instagram => "instagram",
            IconId::Facebook => "facebook",
            IconId::Youtube => "youtube",
            IconId::Globe => "globe",
            IconId::React => "react",
            IconId::Vue => "vuejs",
            IconId::Angular => "angular",
            IconId::Html => "html5",
            IconId::Css => "css3",
            IconId::JavaScript => "js",
            IconId::Sass => "sass",
            IconId::Node => "nodejs",
            IconId::Python => "python",
            IconId::Java => "java",
            IconId::Php => "php",
            IconId::Laravel => "laravel",
            IconId::Database => "database",
            IconId::Redis => "redis",
            IconId::Graphql => "graphql",
            IconId::Django => "django",
            IconId::Spring => "spring",
            IconId::Flask => "flask",
            IconId::Git => "git",
            IconId::Docker => "docker",
            IconId::Aws => "aws",
            IconId::Linux => "linux",
            IconId::Npm => "npm",
            IconId::Windows => "windows",
            IconId::Apple => "apple",
            IconId::Android => "android",
            IconId::Code => "code",
            IconId::Briefcase => "briefcase",
            IconId::AcademicCap => "academic-cap",
            IconId::Sun => "sun",
            IconId::Moon => "moon",
            IconId::Menu => "bars-3",
            IconId::Close => "x-mark",
            IconId::Terminal => "command-line",
            IconId::Mail => "envelope",
            IconId::Phone => "phone",
        }
    }
}

pub const PLATFORM_FALLBACK: IconId = IconId::Globe;
pub const SKILL_FALLBACK: IconId = IconId::Code;

static PLATFORM_ICONS: Lazy<HashMap<&'static str, IconId>> = Lazy::new(|| {
    HashMap::from([
        ("github", IconId::Github),
        ("linkedin", IconId::Linkedin),
        ("twitter", IconId::Twitter),
        ("instagram", IconId::Instagram),
        ("facebook", IconId::Facebook),
        ("youtube", IconId::Youtube),
        ("website", IconId::Globe),
    ])
});

static SKILL_ICONS: Lazy<HashMap<&'static str, IconId>> = Lazy::new(|| {
    HashMap::from([
        // frontend
        ("react", IconId::React),
        ("vue", IconId::Vue),
        ("angular", IconId::Angular),
        ("html", IconId::Html),
        ("css", IconId::Css),
        ("javascript", IconId::JavaScript),
        ("typescript", IconId::JavaScript),
        ("sass", IconId::Sass),
        // backend
        ("node", IconId::Node),
        ("node.js", IconId::Node),
        ("python", IconId::Python),
        ("java", IconId::Java),
        ("php", IconId::Php),
        ("laravel", IconId::Laravel),
        ("django", IconId::Django),
        ("spring", IconId::Spring),
        ("flask", IconId::Flask),
        ("graphql", IconId::Graphql),
        // databases
        ("mysql", IconId::Database),
        ("postgresql", IconId::Database),
        ("mongodb", IconId::Database),
        ("sql", IconId::Database),
        ("redis", IconId::Redis),
        // devops
        ("git", IconId::Git),
        ("docker", IconId::Docker),
        ("aws", IconId::Aws),
        ("linux", IconId::Linux),
        // tools
        ("npm", IconId::Npm),
        ("github", IconId::Github),
        // operating systems
        ("windows", IconId::Windows),
        ("macos", IconId::Apple),
        ("android", IconId::Android),
    ])
});

/// Icon for a social platform; unknown platforms get the globe.
pub fn platform_icon(platform: &str) -> IconId {
    PLATFORM_ICONS
        .get(platform.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(PLATFORM_FALLBACK)
}

/// Icon for a skill name; unknown skills get the generic code icon.
pub fn skill_icon(name: &str) -> IconId {
    SKILL_ICONS
        .get(name.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(SKILL_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_lookup_ignores_case() {
        assert_eq!(platform_icon("GitHub"), IconId::Github);
        assert_eq!(platform_icon("LINKEDIN"), IconId::Linkedin);
    }

    #[test]
    fn unknown_platform_falls_back_to_globe() {
        assert_eq!(platform_icon("mastodon"), IconId::Globe);
        assert_eq!(platform_icon(""), IconId::Globe);
    }

    #[test]
    fn skill_lookup_and_fallback() {
        assert_eq!(skill_icon("PostgreSQL"), IconId::Database);
        assert_eq!(skill_icon("Node.js"), IconId::Node);
        assert_eq!(skill_icon("Rust"), IconId::Code);
    }
}
