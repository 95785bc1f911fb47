use crate::core::{selector, SkinTypeChooser, SkinTypeSet};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

pub const WELCOME_BANNER: &str = "Welcome to the Animals Web Generator!";
pub const SKIN_TYPE_PROMPT: &str =
    "Please enter a skin type of the animal that you wish to see on the site: ";

/// 互動式選擇：列出皮膚類型，反覆詢問直到輸入有效為止。
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsolePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub async fn greet(&mut self) -> Result<()> {
        self.writer
            .write_all(format!("{}\n\n", WELCOME_BANNER).as_bytes())
            .await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[async_trait]
impl<R, W> SkinTypeChooser for ConsolePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn choose(&mut self, available: &SkinTypeSet) -> Result<String> {
        let mut listing = String::new();
        for skin_type in available.iter() {
            listing.push_str(skin_type);
            listing.push('\n');
        }
        self.writer.write_all(listing.as_bytes()).await?;

        let mut line = String::new();
        loop {
            self.writer.write_all(SKIN_TYPE_PROMPT.as_bytes()).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                return Err(EtlError::InputClosed);
            }

            // 只去掉行尾換行，其餘空白交給 validate 處理
            let answer = line.trim_end_matches(['\n', '\r']);
            if let Some(skin_type) = selector::validate(available, answer) {
                return Ok(skin_type);
            }
            tracing::debug!("Rejected skin type input {:?}", answer);
        }
    }
}

/// 非互動模式：使用預先指定的皮膚類型。
#[derive(Debug, Clone)]
pub struct FixedSkinType {
    value: String,
}

impl FixedSkinType {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[async_trait]
impl SkinTypeChooser for FixedSkinType {
    async fn choose(&mut self, available: &SkinTypeSet) -> Result<String> {
        selector::validate(available, &self.value).ok_or_else(|| EtlError::InvalidSkinType {
            value: self.value.clone(),
            available: available.to_vec(),
        })
    }
}
