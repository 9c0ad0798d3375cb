// Code generated by protoc-gen-mcpserver. DO NOT EDIT.
// source: example.proto

use ::mcpserver_runtime as mcp;

/// Message `example.SumRequest`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SumRequest {
    pub a: i32,
    pub b: i32,
}

/// Message `example.SumResponse`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SumResponse {
    pub result: i32,
}

/// Message `example.NamesRequest`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamesRequest {
    pub names: Vec<String>,
    pub r#type: String,
}

/// Message `example.NamesResponse`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamesResponse {
    pub processed: Vec<String>,
    pub count: u32,
}

/// Message `example.Empty`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Empty {
}

/// Message `example.S`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleS {
    pub r#gen: i64,
}

/// Adapter for service `Example`.
///
/// Each method backs one tool; errors are returned to the client unchanged.
#[mcp::async_trait]
pub trait ExampleMcpServer: Send + Sync + 'static {
    async fn sum(
        &self,
        ctx: mcp::CallContext,
        req: SumRequest,
    ) -> ::core::result::Result<SumResponse, mcp::ToolError>;
    async fn process_names(
        &self,
        ctx: mcp::CallContext,
        req: NamesRequest,
    ) -> ::core::result::Result<NamesResponse, mcp::ToolError>;
    async fn ping(
        &self,
        ctx: mcp::CallContext,
        req: Empty,
    ) -> ::core::result::Result<Empty, mcp::ToolError>;
    async fn r#gen(
        &self,
        ctx: mcp::CallContext,
        req: ExampleS,
    ) -> ::core::result::Result<Empty, mcp::ToolError>;
}

/// Registers one tool per `Example` method, in declaration order.
pub fn register_example_mcp_server<S: ExampleMcpServer>(
    server: &mut mcp::ToolServer,
    srv: ::std::sync::Arc<S>,
) {
    {
        let definition = mcp::ToolDefinition::new("Sum")
            .number("a", "Parameter a")
            .number("b", "Parameter b")
            .description("Sum description")
            .title("Sum");
        let srv = ::std::sync::Arc::clone(&srv);
        server.add_tool(
            definition,
            move |ctx: mcp::CallContext, args: mcp::Arguments| {
                let srv = ::std::sync::Arc::clone(&srv);
                async move {
                    let req = SumRequest {
                        a: args.parse_i32("a", 0),
                        b: args.parse_i32("b", 0),
                    };
                    let res = S::sum(&srv, ctx, req).await?;
                    let mut output = mcp::ToolOutput::new();
                    output.line("result", mcp::format::integer(&res.result));
                    ::core::result::Result::Ok::<_, mcp::ToolError>(output.into_result())
                }
            },
        );
    }
    {
        let definition = mcp::ToolDefinition::new("ProcessNames")
            .array("names", "Parameter names", mcp::ParamKind::String)
            .string("type", "Parameter type")
            .description("ProcessNames description")
            .title("ProcessNames");
        let srv = ::std::sync::Arc::clone(&srv);
        server.add_tool(
            definition,
            move |ctx: mcp::CallContext, args: mcp::Arguments| {
                let srv = ::std::sync::Arc::clone(&srv);
                async move {
                    let req = NamesRequest {
                        names: args.repeated("names", mcp::coerce::string),
                        r#type: args.parse_string("type", String::new()),
                    };
                    let res = S::process_names(&srv, ctx, req).await?;
                    let mut output = mcp::ToolOutput::new();
                    output.line("processed", mcp::format::string_list(&res.processed));
                    output.line("count", mcp::format::integer(&res.count));
                    ::core::result::Result::Ok::<_, mcp::ToolError>(output.into_result())
                }
            },
        );
    }
    {
        let definition = mcp::ToolDefinition::new("Ping")
            .description("Ping description")
            .title("Ping");
        let srv = ::std::sync::Arc::clone(&srv);
        server.add_tool(
            definition,
            move |ctx: mcp::CallContext, _args: mcp::Arguments| {
                let srv = ::std::sync::Arc::clone(&srv);
                async move {
                    let req = Empty {
                    };
                    let _res = S::ping(&srv, ctx, req).await?;
                    let output = mcp::ToolOutput::new();
                    ::core::result::Result::Ok::<_, mcp::ToolError>(output.into_result())
                }
            },
        );
    }
    {
        let definition = mcp::ToolDefinition::new("Gen")
            .number("gen", "Parameter gen")
            .description("Gen description")
            .title("Gen");
        let srv = ::std::sync::Arc::clone(&srv);
        server.add_tool(
            definition,
            move |ctx: mcp::CallContext, args: mcp::Arguments| {
                let srv = ::std::sync::Arc::clone(&srv);
                async move {
                    let req = ExampleS {
                        r#gen: args.parse_i64("gen", 0),
                    };
                    let _res = S::r#gen(&srv, ctx, req).await?;
                    let output = mcp::ToolOutput::new();
                    ::core::result::Result::Ok::<_, mcp::ToolError>(output.into_result())
                }
            },
        );
    }
}

/// Serves every service in `example.proto` over stdio until the client disconnects.
pub async fn serve_stdio(
    name: &str,
    version: &str,
    srv_example: ::std::sync::Arc<impl ExampleMcpServer>,
) -> ::core::result::Result<(), mcp::ServeError> {
    let mut server = mcp::ToolServer::new(name, version);
    register_example_mcp_server(&mut server, srv_example);
    server.serve_stdio().await
}
