/// Language telltales, in priority order: the first language with any
/// telltale present in the code wins.
pub const LANGUAGE_PATTERNS: &[(&str, &[&str])] = &[
    ("python", &["def ", "import ", "class ", "if __name__", "lambda", "yield"]),
    ("javascript", &["function ", "const ", "let ", "var ", "=>", "require("]),
    ("typescript", &["interface ", "type ", "enum ", "namespace ", "export "]),
    ("java", &["public class ", "private ", "protected ", "import java", "static"]),
    ("cpp", &["#include", "int main", "class ", "namespace ", "std::"]),
    ("go", &["package ", "func ", "import ", "type ", "var "]),
    ("rust", &["fn ", "let ", "use ", "mod ", "impl ", "struct "]),
    ("php", &["<?php", "function ", "class ", "namespace ", "use "]),
    ("ruby", &["def ", "class ", "module ", "require ", "end"]),
    ("swift", &["func ", "class ", "struct ", "import ", "var "]),
    ("kotlin", &["fun ", "class ", "import ", "val ", "var "]),
];

/// Topic keyword tables. A topic is reported when any keyword appears as a
/// substring of the lowercased code; coarse and false-positive-prone by
/// design.
pub const TOPIC_PATTERNS: &[(&str, &[&str])] = &[
    ("authentication", &["login", "auth", "jwt", "token", "password", "session"]),
    ("database", &["query", "select", "insert", "update", "delete", "sql", "db"]),
    ("api", &["endpoint", "route", "request", "response", "http", "rest"]),
    ("security", &["hash", "encrypt", "validate", "sanitize", "csrf", "xss"]),
    ("error_handling", &["try", "catch", "except", "error", "exception", "raise"]),
    ("async", &["async", "await", "promise", "future", "coroutine", "asyncio"]),
    ("testing", &["test", "assert", "mock", "fixture", "pytest", "unittest"]),
    ("logging", &["log", "debug", "info", "warn", "error", "logger"]),
    ("file_io", &["read", "write", "open", "close", "file", "path"]),
    ("network", &["socket", "http", "tcp", "udp", "request", "response"]),
];

/// Risk keyword tables, same matching rule as topics. Order here also fixes
/// the order of risk-based suggestions.
pub const RISK_PATTERNS: &[(&str, &[&str])] = &[
    ("sql_injection", &["execute", "query", "sql", "raw", "format"]),
    ("xss", &["innerhtml", "document.write", "eval", "innertext"]),
    ("hardcoded_secrets", &["password", "secret", "key", "token", "api_key"]),
    ("memory_leaks", &["malloc", "new", "create", "allocate", "memory"]),
    ("race_conditions", &["thread", "async", "concurrent", "parallel", "lock"]),
    ("infinite_loops", &["while true", "for i in range", "recursive"]),
    ("unsafe_eval", &["eval", "exec", "compile", "__import__"]),
    ("path_traversal", &["../", "..\\", "path", "file", "directory"]),
];

/// Canned remediation per risk, emitted in `RISK_PATTERNS` order.
pub const RISK_SUGGESTIONS: &[(&str, &str)] = &[
    ("sql_injection", "Use parameterized queries to prevent SQL injection"),
    ("xss", "Sanitize user input to prevent XSS attacks"),
    ("hardcoded_secrets", "Move secrets to environment variables or secure config"),
    ("memory_leaks", "Ensure proper resource cleanup and memory management"),
    ("race_conditions", "Add proper synchronization mechanisms"),
    ("infinite_loops", "Add break conditions to prevent infinite loops"),
    ("unsafe_eval", "Avoid using eval() for security reasons"),
    ("path_traversal", "Validate and sanitize file paths"),
];
