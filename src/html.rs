//! HTML content helpers for the profileweb UI.
//!
//! Exports static pages (`ADMIN_INDEX_PAGE`) and the `render_profile` helper
//! which substitutes the Vapi credentials into the profile page. Keep large
//! HTML blobs here to avoid runtime template dependencies.
//!

/// Marker replaced by the serialized Vapi init payload at render time
const VAPI_INIT_MARKER: &str = "__VAPI_INIT__";

/// HTML page for the profile card with the Vapi voice-assistant bootstrap
const PROFILE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Profile</title>
    <style>
        body {
            margin: 0;
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            color: #333;
        }

        .profile-card {
            background: white;
            border-radius: 16px;
            box-shadow: 0 20px 40px rgba(0,0,0,0.2);
            width: 100%;
            max-width: 420px;
            padding: 2rem;
            margin: 2rem;
        }

        .profile-header {
            text-align: center;
            border-bottom: 1px solid #eee;
            padding-bottom: 1.5rem;
        }

        .avatar-img {
            width: 150px;
            height: 150px;
            border-radius: 50%;
            object-fit: cover;
        }

        .profile-name {
            margin: 0.8rem 0 0.2rem;
            font-size: 1.6rem;
        }

        .profile-title {
            margin: 0;
            color: #777;
        }

        .profile-section {
            margin-top: 1.5rem;
        }

        .profile-section h2 {
            font-size: 1rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: #667eea;
        }

        .skill-tag {
            display: inline-block;
            background: #eef1fb;
            color: #4a5bbf;
            border-radius: 12px;
            padding: 4px 12px;
            margin: 3px;
            font-size: 0.85rem;
        }
    </style>
</head>
<body>
    <div class="profile-card">
        <div class="profile-header">
            <img src="https://via.placeholder.com/150" alt="Profile Avatar" class="avatar-img">
            <h1 class="profile-name">John Doe</h1>
            <p class="profile-title">Software Developer</p>
        </div>

        <div class="profile-section">
            <h2>About</h2>
            <p>
                Passionate software developer with expertise in React, Node.js, and modern web technologies.
                Always learning and building innovative solutions.
            </p>
        </div>

        <div class="profile-section">
            <h2>Contact</h2>
            <p><strong>Email:</strong> john.doe@example.com</p>
            <p><strong>Location:</strong> San Francisco, CA</p>
        </div>

        <div class="profile-section">
            <h2>Skills</h2>
            <span class="skill-tag">React</span>
            <span class="skill-tag">JavaScript</span>
            <span class="skill-tag">Node.js</span>
            <span class="skill-tag">TypeScript</span>
            <span class="skill-tag">CSS</span>
            <span class="skill-tag">HTML</span>
        </div>
    </div>

    <script>
        // Load the Vapi SDK script and start the assistant button
        (function () {
            const init = __VAPI_INIT__;

            function startVapi() {
                if (window.vapiSDK) {
                    window.vapiInstance = window.vapiSDK.run(init);
                }
            }

            if (window.vapiSDK) {
                startVapi();
                return;
            }

            const script = document.createElement('script');
            script.src = 'https://cdn.jsdelivr.net/gh/VapiAI/html-script-tag@latest/dist/assets/index.js';
            script.defer = true;
            script.async = true;
            script.onload = startVapi;
            document.body.appendChild(script);
        })();
    </script>
</body>
</html>"#;

/// HTML placeholder page for the administrative interface index
pub const ADMIN_INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Site administration</title>
    <style>
        body { background: #f5f5f5; color: #333; font-family: 'Segoe UI', sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .admin-card { background: white; padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); width: 100%; max-width: 350px; text-align: center; }
        h2 { color: #417690; }
        p { color: #777; font-size: 0.9rem; }
    </style>
</head>
<body>
    <div class="admin-card">
        <h2>Site administration</h2>
        <p>No administrative models are registered for this site.</p>
        <a href="/">Back to profile</a>
    </div>
</body>
</html>"#;

/// Render the profile page with the Vapi credentials
///
/// # Arguments
/// * `assistant_id` - Vapi assistant identifier handed to the SDK
/// * `api_key` - Vapi public API key handed to the SDK
///
/// Both values are embedded into the inline bootstrap script as JSON string
/// literals, so quotes and backslashes in a key never produce broken markup.
pub fn render_profile(assistant_id: &str, api_key: &str) -> String {
    let init = serde_json::json!({
        "apiKey": api_key,
        "assistant": assistant_id,
        "config": {}
    });

    PROFILE_PAGE.replace(VAPI_INIT_MARKER, &init.to_string())
}
