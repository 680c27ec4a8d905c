//! HTML content helpers for the hearthweb UI.
//!
//! Exports the static home page (`INDEX_PAGE`). Keep HTML blobs here to
//! avoid runtime template dependencies.
//!
/// HTML page for the home route
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Hearth</title>
    <style>
        :root {
            --bg-dark: #1a1a1a;
            --card-bg: #252526;
            --accent: #007acc;
            --text: #cccccc;
        }

        body {
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
            background: var(--bg-dark);
            color: var(--text);
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        }

        .card {
            background: var(--card-bg);
            padding: 2rem 3rem;
            border-radius: 12px;
            border: 1px solid #333;
            text-align: center;
        }

        h1 {
            color: var(--accent);
            margin-bottom: 0.5rem;
        }

        p {
            margin: 0;
        }
    </style>
</head>
<body>
    <div class="card">
        <h1>Hearth</h1>
        <p>Welcome home.</p>
    </div>
</body>
</html>"#;
