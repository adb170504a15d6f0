//! The template catalog: every generated file's content lives here, keyed by
//! a [`Template`] value. Rendering is pure and deterministic; the feature
//! templates substitute the feature name, with casing transforms applied
//! internally.

use crate::types::FeatureName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Dotenv,
    TsConfig,
    JsConfig,
    ViteConfig,
    TailwindConfig,
    MainCss,
    MainJsx,
    IndexScreenJsx,
    ApiConfig,
    GitignoreProject,
    GitignoreBackend,
    ServerEntry,
    Routes,
    TypeDeclarations,
    ResponseMiddleware,
    PaginationMiddleware,
    FeatureModel { name: FeatureName },
    FeatureController { name: FeatureName },
    FeatureRouter { name: FeatureName },
}

impl Template {
    pub fn render(&self) -> String {
        match self {
            Template::Dotenv => DOTENV.to_string(),
            Template::TsConfig => TSCONFIG.to_string(),
            Template::JsConfig => JSCONFIG.to_string(),
            Template::ViteConfig => VITE_CONFIG.to_string(),
            Template::TailwindConfig => TAILWIND_CONFIG.to_string(),
            Template::MainCss => MAIN_CSS.to_string(),
            Template::MainJsx => MAIN_JSX.to_string(),
            Template::IndexScreenJsx => INDEX_SCREEN_JSX.to_string(),
            Template::ApiConfig => API_CONFIG.to_string(),
            Template::GitignoreProject => GITIGNORE_PROJECT.to_string(),
            Template::GitignoreBackend => GITIGNORE_BACKEND.to_string(),
            Template::ServerEntry => SERVER_ENTRY.to_string(),
            Template::Routes => ROUTES.to_string(),
            Template::TypeDeclarations => TYPE_DECLARATIONS.to_string(),
            Template::ResponseMiddleware => RESPONSE_MIDDLEWARE.to_string(),
            Template::PaginationMiddleware => PAGINATION_MIDDLEWARE.to_string(),
            Template::FeatureModel { name } => feature_model(name),
            Template::FeatureController { name } => feature_controller(name),
            Template::FeatureRouter { name } => feature_router(name),
        }
    }
}

// ---------------------------------------------------------------------------
// Casing transforms
// ---------------------------------------------------------------------------

/// `blog-post` -> `BlogPost`; used for generated type and model identifiers.
fn pascal_case(name: &str) -> String {
    name.split(['-', '_', '.'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `blog-post` -> `blogPost`; used for generated variable identifiers.
fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Feature templates
// ---------------------------------------------------------------------------

fn feature_model(name: &FeatureName) -> String {
    let pascal = pascal_case(name.as_str());
    let camel = camel_case(name.as_str());
    format!(
        r#"import {{ Schema, model }} from "mongoose";

export interface I{pascal} {{
    createdAt: Date;
    updatedAt: Date;
}}

const {camel}Schema = new Schema<I{pascal}>(
    {{
        // add {name} fields here
    }},
    {{ timestamps: true }}
);

export default model<I{pascal}>("{pascal}", {camel}Schema);
"#
    )
}

fn feature_controller(name: &FeatureName) -> String {
    let pascal = pascal_case(name.as_str());
    format!(
        r#"import {{ Request, Response }} from "express";
import {pascal} from "../models/{name}_model";

export const list{pascal}s = async (req: Request, res: Response) => {{
    const skip = req.pagination?.skip ?? 0;
    const limit = req.pagination?.limit ?? 20;
    const items = await {pascal}.find().skip(skip).limit(limit);
    res.sendPayload(items);
}};

export const get{pascal} = async (req: Request, res: Response) => {{
    const item = await {pascal}.findById(req.params.id);
    if (!item) {{
        res.status(404).json({{ success: false, message: "{name} not found" }});
        return;
    }}
    res.sendPayload(item);
}};

export const create{pascal} = async (req: Request, res: Response) => {{
    const item = await {pascal}.create(req.body);
    res.status(201).sendPayload(item, "{name} created");
}};

export const delete{pascal} = async (req: Request, res: Response) => {{
    await {pascal}.findByIdAndDelete(req.params.id);
    res.sendPayload(null, "{name} deleted");
}};
"#
    )
}

fn feature_router(name: &FeatureName) -> String {
    let pascal = pascal_case(name.as_str());
    let camel = camel_case(name.as_str());
    format!(
        r#"import {{ Router }} from "express";
import {{
    create{pascal},
    delete{pascal},
    get{pascal},
    list{pascal}s,
}} from "../controllers/{name}_controller";

const {camel}Router = Router();

{camel}Router.get("/", list{pascal}s);
{camel}Router.get("/:id", get{pascal});
{camel}Router.post("/", create{pascal});
{camel}Router.delete("/:id", delete{pascal});

export default {camel}Router;
"#
    )
}

// ---------------------------------------------------------------------------
// Static templates
// ---------------------------------------------------------------------------

const DOTENV: &str = "PORT=3000\nMONGO_URI=mongodb://localhost:27017/app\n";

const TSCONFIG: &str = r#"{
	"compilerOptions": {
		"target": "ES6",
		"rootDir": "./src",
		"outDir": "./dist",
		"module": "commonjs",
		"esModuleInterop": true,
		"forceConsistentCasingInFileNames": true,
		"skipLibCheck": true
	}
}"#;

const JSCONFIG: &str = r#"{
	"compilerOptions": {
		"checkJs": true,
		"jsx": "react-jsx"
	}
}"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from "vite";
import react from "@vitejs/plugin-react";

export default defineConfig({
    plugins: [react()],
    server: {
        proxy: {
            "/api": "http://localhost:3000",
        },
    },
});
"#;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
    content: ["./index.html", "./src/**/*.{js,jsx}"],
    theme: {
        extend: {},
    },
    plugins: [],
};
"#;

const MAIN_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const MAIN_JSX: &str = r#"import React from "react";
import ReactDOM from "react-dom/client";
import { BrowserRouter, Route, Routes } from "react-router-dom";
import IndexScreen from "./screens/index_screen.jsx";
import "./main.css";

ReactDOM.createRoot(document.getElementById("root")).render(
    <React.StrictMode>
        <BrowserRouter>
            <Routes>
                <Route path="/" element={<IndexScreen />} />
            </Routes>
        </BrowserRouter>
    </React.StrictMode>
);
"#;

const INDEX_SCREEN_JSX: &str = r#"export default function IndexScreen() {
    return (
        <div className="flex min-h-screen items-center justify-center">
            <h1 className="text-3xl font-bold">It works.</h1>
        </div>
    );
}
"#;

const API_CONFIG: &str = r#"import axios from "axios";

const api = axios.create({
    baseURL: "/api",
});

export default api;
"#;

const GITIGNORE_PROJECT: &str = "node_modules/\ndist/\n.env\n.DS_Store\n";

const GITIGNORE_BACKEND: &str = "node_modules/\ndist/\n.env\n";

const SERVER_ENTRY: &str = r#"import express from "express";
import helmet from "helmet";
import cors from "cors";
import morgan from "morgan";
import bodyParser from "body-parser";
import mongoose from "mongoose";
import dotenv from "dotenv";
import routes from "./routes";
import { shapeResponse } from "./middlewares/response";
import { pagination } from "./middlewares/pagination";

dotenv.config();

const app = express();

app.use(helmet());
app.use(cors());
app.use(morgan("dev"));
app.use(bodyParser.json());
app.use(shapeResponse);
app.use(pagination);
app.use("/api", routes);

const port = process.env.PORT ?? 3000;

mongoose
    .connect(process.env.MONGO_URI ?? "mongodb://localhost:27017/app")
    .then(() => {
        app.listen(port, () => {
            console.log(`Server listening on port ${port}`);
        });
    })
    .catch((err) => {
        console.error("Failed to connect to database", err);
        process.exit(1);
    });
"#;

const ROUTES: &str = r#"import { Router } from "express";

const routes = Router();

// Register feature routers here, e.g.:
// import userRouter from "./routers/user_router";
// routes.use("/users", userRouter);

export default routes;
"#;

const TYPE_DECLARATIONS: &str = r#"import "express";

declare module "express-serve-static-core" {
    interface Response {
        sendPayload(data: unknown, message?: string): void;
    }
    interface Request {
        pagination?: {
            page: number;
            limit: number;
            skip: number;
        };
    }
}
"#;

const RESPONSE_MIDDLEWARE: &str = r#"import { NextFunction, Request, Response } from "express";

export const shapeResponse = (req: Request, res: Response, next: NextFunction) => {
    res.sendPayload = (data: unknown, message = "ok") => {
        res.json({ success: true, message, data });
    };
    next();
};
"#;

const PAGINATION_MIDDLEWARE: &str = r#"import { NextFunction, Request, Response } from "express";

const DEFAULT_LIMIT = 20;
const MAX_LIMIT = 100;

export const pagination = (req: Request, res: Response, next: NextFunction) => {
    const page = Math.max(1, Number(req.query.page) || 1);
    const limit = Math.min(
        MAX_LIMIT,
        Math.max(1, Number(req.query.limit) || DEFAULT_LIMIT)
    );
    req.pagination = { page, limit, skip: (page - 1) * limit };
    next();
};
"#;
