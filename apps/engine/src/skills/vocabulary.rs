//! Skill vocabulary tables. Pure declarative data, no behavior beyond lookup.
//!
//! Table iteration order is part of the contract: alias resolution takes the
//! first canonical entry whose alias list contains the skill.

/// Shorthand spellings folded into their canonical skill name before any
/// synonym expansion.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("golang", "go"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("ml", "machine learning"),
];

/// Canonical skill → recognized aliases. A resume or job skill matching any
/// member of a group counts as the canonical skill.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("typescript", &["ts"]),
    ("node.js", &["node", "nodejs"]),
    ("react", &["react.js", "reactjs"]),
    ("vue", &["vue.js", "vuejs"]),
    ("angular", &["angularjs", "angular.js"]),
    ("express", &["express.js", "expressjs"]),
    ("next.js", &["nextjs"]),
    ("python", &["py"]),
    ("go", &["golang"]),
    ("c++", &["cpp"]),
    ("c#", &["csharp"]),
    (".net", &["dotnet"]),
    ("kubernetes", &["k8s"]),
    ("docker", &["docker engine"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("mysql", &["my sql"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("machine learning", &["ml"]),
    ("deep learning", &["dl"]),
    ("rest", &["restful", "rest api", "rest apis"]),
    ("graphql", &["graph ql"]),
    ("ci/cd", &["cicd", "ci cd"]),
];

/// Recognized technical terms, used only when inferring a skill list from
/// free text (postings without a structured skills section).
pub const TECHNICAL_VOCABULARY: &[&str] = &[
    // Languages
    "javascript", "typescript", "python", "java", "rust", "go", "ruby", "php",
    "c", "c++", "c#", "swift", "kotlin", "scala", "r", "matlab", "perl",
    "haskell", "elixir", "clojure", "dart", "lua", "objective-c", "sql",
    // Frontend
    "react", "vue", "angular", "svelte", "next.js", "nuxt", "html", "css",
    "sass", "less", "tailwind", "bootstrap", "jquery", "webpack", "vite",
    "redux", "babel",
    // Backend / frameworks
    "node.js", "express", "django", "flask", "fastapi", "spring", "rails",
    "laravel", ".net", "asp.net", "actix", "axum", "tokio", "gin", "fiber",
    "nestjs", "graphql", "rest", "grpc", "websocket", "microservices",
    // Infrastructure
    "docker", "kubernetes", "terraform", "ansible", "jenkins", "aws", "gcp",
    "azure", "heroku", "nginx", "apache", "linux", "unix", "bash", "git",
    "github", "gitlab", "ci/cd", "devops", "serverless", "lambda",
    "cloudformation", "helm", "prometheus", "grafana", "vault",
    // Data stores
    "postgresql", "mysql", "mongodb", "redis", "cassandra", "dynamodb",
    "sqlite", "elasticsearch", "kafka", "rabbitmq", "memcached", "neo4j",
    "snowflake", "bigquery", "clickhouse",
    // Data / ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
    "scikit-learn", "pandas", "numpy", "scipy", "spark", "hadoop", "airflow",
    "jupyter", "tableau", "nlp", "opencv", "hugging face", "llm",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Testing / practice
    "jest", "pytest", "junit", "selenium", "cypress", "tdd", "bdd", "agile",
    "scrum", "kanban", "jira", "oauth", "jwt", "oop", "etl", "api",
];
