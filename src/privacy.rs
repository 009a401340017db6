use axum::response::Html;

const PRIVACY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head><meta charset="utf-8"><title>プライバシーポリシー</title></head>
<body>
<h1>プライバシーポリシー</h1>
<p>本APIは、送信された商品ページのURLのみを取得・解析します。</p>
<p>取得したページ内容や生成した説明文は保存せず、第三者に提供することもありません。</p>
</body>
</html>
"#;

pub async fn privacy() -> Html<&'static str> {
    Html(PRIVACY_PAGE)
}
