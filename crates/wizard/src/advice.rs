//! Static advisory content printed around the questions.

use std::io::{self, Write};

use crate::choice::{Complexity, Framework, Platform, PrivacyLevel};

pub const WELCOME: &[&str] = &[
    "Welcome! I'm here to guide you through building a robust backend",
    "for your health insurance quote system. Let's build something amazing!",
    "",
    "I'll ask you questions one at a time to understand your needs",
    "and provide tailored guidance, code snippets, and best practices.",
];

pub const FRONTEND_STACK: &[&str] = &[
    "React + Vite setup",
    "Tailwind CSS for styling",
    "Chat interface for user interaction",
    "Form handling with react-hook-form",
    "Routing with react-router",
];

pub const FRONTEND_INTEGRATION_POINTS: &[&str] = &[
    "Chat interface collects: age, medical history, lifestyle, coverage needs",
    "Expected API call in chat.jsx: getQuotation() function",
    "Quote display component ready for API response",
    "Form data structure: {age, medicalHistory, lifestyle, coverageNeed}",
];

pub const RAG_CONCEPT: &[&str] = &[
    "Vector database for insurance policy data",
    "Semantic search for relevant policies",
    "LLM for generating personalized quotes",
];

pub const RAG_IMPLEMENTATION: &[(&str, &[&str])] = &[
    ("Data Preparation", &[
        "Collect insurance policy documents",
        "Chunk text into semantic segments",
        "Generate embeddings for each chunk",
        "Store in vector database",
    ]),
    ("Query Processing", &[
        "Convert user input to embeddings",
        "Search vector DB for relevant policies",
        "Rank results by similarity",
    ]),
    ("Response Generation", &[
        "Combine user query + retrieved context",
        "Send to LLM for quote generation",
        "Format response for frontend",
    ]),
];

pub const DATA_NEEDS: &[&str] = &[
    "Insurance policies and plans",
    "Coverage options and limits",
    "Premium calculations",
    "Provider information",
    "User health profiles",
];

pub const API_ENDPOINTS: &[&str] = &[
    "POST /api/quote - Generate insurance quote",
    "GET /api/providers - List insurance providers",
    "GET /api/plans - Get available plans",
    "POST /api/chat - Handle chat interactions",
];

pub const API_EXAMPLE: &str = r#"
POST /api/quote
{
  "age": 35,
  "medical_history": "No pre-existing conditions",
  "lifestyle": "Moderately active",
  "coverage_need": "Comprehensive coverage"
}

Response:
{
  "quote_id": "q123456",
  "plan": {
    "name": "Comprehensive Health Plus",
    "monthly_premium": 285,
    "deductible": 1500,
    "out_of_pocket_max": 5000
  },
  "benefits": [...],
  "provider": "HealthCorp"
}"#;

pub const FRONTEND_EXPECTATIONS: &[&str] = &[
    "getQuotation() function in chat.jsx",
    "JSON response with quote data",
    "Error handling for failed requests",
];

pub fn framework_benefits(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::FastApi => &[
            "🚀 High performance (async/await)",
            "📚 Automatic API documentation",
            "🔒 Built-in data validation",
            "🐍 Great for ML/LLM integration",
        ],
        Framework::Flask => &[
            "⚡ Lightweight and flexible",
            "📖 Extensive documentation",
            "🔧 Easy to customize",
            "👨‍💻 Great for rapid prototyping",
        ],
        Framework::Express => &[
            "🌐 JavaScript full-stack",
            "⚡ Fast I/O operations",
            "📦 Huge npm ecosystem",
            "🔄 Easy frontend integration",
        ],
        Framework::Django => &[
            "🏗️ Full-featured framework",
            "👑 Built-in admin interface",
            "🗄️ Powerful ORM",
            "🔐 Strong security features",
        ],
    }
}

pub fn data_example(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => {
            r#"
{
  "plan_id": "basic_health_001",
  "name": "Basic Health Plan",
  "premium_range": {
    "min": 200,
    "max": 400
  },
  "coverage_type": "basic",
  "deductible": 1500
}"#
        },
        Complexity::Moderate => {
            r#"
{
  "plan_id": "comprehensive_001",
  "name": "Comprehensive Health Plus",
  "tiers": ["bronze", "silver", "gold"],
  "coverage": {
    "medical": true,
    "dental": true,
    "vision": false
  },
  "pricing": {
    "age_groups": {
      "18-30": 285,
      "31-50": 385,
      "51+": 485
    }
  }
}"#
        },
        Complexity::Complex => {
            r#"
{
  "plan_id": "premium_underwritten_001",
  "underwriting_factors": {
    "age": {"weight": 0.3, "bands": [...]},
    "medical_history": {"weight": 0.4, "conditions": [...]},
    "lifestyle": {"weight": 0.2, "factors": [...]}
  },
  "calculation_engine": {
    "base_premium": 300,
    "risk_multipliers": {...},
    "discounts": {...}
  }
}"#
        },
    }
}

/// `None` (a free-text answer) gets the baseline list.
pub fn security_recommendations(level: Option<PrivacyLevel>) -> &'static [&'static str] {
    match level {
        Some(PrivacyLevel::High) => &[
            "HIPAA compliance required",
            "End-to-end encryption",
            "Audit logging",
            "Data retention policies",
            "Regular security assessments",
        ],
        Some(PrivacyLevel::Medium) => &[
            "HTTPS everywhere",
            "Data encryption at rest",
            "Input validation",
            "Rate limiting",
            "Basic audit logging",
        ],
        Some(PrivacyLevel::Low) | None => &[
            "HTTPS for API calls",
            "Basic input validation",
            "CORS configuration",
            "API rate limiting",
        ],
    }
}

pub fn deployment_guidance(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Local => &[
            "Use Docker Compose for multi-service setup",
            "Include database, API, and vector DB services",
            "Hot reload for development",
        ],
        Platform::Cloud => &[
            "Consider containerization (Docker)",
            "Use managed databases",
            "Implement auto-scaling",
            "Set up monitoring and logging",
        ],
        Platform::Paas => &[
            "Simple git-based deployment",
            "Environment variable configuration",
            "Built-in scaling options",
        ],
        Platform::Serverless => &[
            "Function-based architecture",
            "Cold start considerations for LLM",
            "Use managed vector databases",
        ],
    }
}

/// Project setup commands for the next-steps list. Django has no guide
/// and gets only the generic steps.
pub fn framework_setup(framework: Framework) -> Option<(&'static str, &'static str)> {
    match framework {
        Framework::FastApi => Some((
            "pip install fastapi uvicorn",
            "backend-guide/frameworks/fastapi/",
        )),
        Framework::Flask => Some((
            "pip install flask flask-cors",
            "backend-guide/frameworks/flask/",
        )),
        Framework::Express => Some((
            "npm init && npm install express cors",
            "backend-guide/frameworks/nodejs/",
        )),
        Framework::Django => None,
    }
}

/// Write `items` as an indented bullet list.
pub fn write_bullets(out: &mut impl Write, indent: &str, items: &[&str]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{indent}• {item}")?;
    }
    Ok(())
}
