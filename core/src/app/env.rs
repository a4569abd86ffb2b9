/// Loads environment variables from a `.env` file in the current directory or its ancestors, without overriding
/// variables that are already set.
pub fn load_dotenv() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
}
